use ims_client::{ClientError, ErrorKind};
use ims_config::ConfigError;
use ims_core::InvalidArgument;

pub const EXIT_GENERIC_FAILURE: i32 = 1;
pub const EXIT_INVALID_ARGUMENT: i32 = 2;
pub const EXIT_REMOTE_FAILURE: i32 = 3;
pub const EXIT_APPLICATION_FAILURE: i32 = 4;

/// Pick the process exit code from the first classified error in the chain.
#[must_use]
pub fn exit_code(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(client) = cause.downcast_ref::<ClientError>() {
            return match client.kind() {
                ErrorKind::InvalidArgument => EXIT_INVALID_ARGUMENT,
                ErrorKind::RemoteRequest => EXIT_REMOTE_FAILURE,
                ErrorKind::ApplicationFailure => EXIT_APPLICATION_FAILURE,
            };
        }
        if cause.is::<ConfigError>() || cause.is::<InvalidArgument>() {
            return EXIT_INVALID_ARGUMENT;
        }
    }
    EXIT_GENERIC_FAILURE
}

/// Messages IMS returned with an application-level failure, if that is
/// what `error` is.
#[must_use]
pub fn failure_messages(error: &anyhow::Error) -> &[String] {
    error
        .chain()
        .find_map(|cause| match cause.downcast_ref::<ClientError>() {
            Some(ClientError::ApplicationFailure { messages, .. }) => Some(messages.as_slice()),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use ims_client::ClientError;
    use ims_config::ConfigError;
    use ims_core::{InvalidArgument, ResourceKind};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn client_errors_map_by_kind() {
        let invalid = anyhow::Error::from(ClientError::from(InvalidArgument::MissingNames {
            resource: ResourceKind::Transaction,
        }));
        assert_eq!(exit_code(&invalid), EXIT_INVALID_ARGUMENT);

        let remote = anyhow::Error::from(ClientError::Api {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(exit_code(&remote), EXIT_REMOTE_FAILURE);

        let failure = anyhow::Error::from(ClientError::ApplicationFailure {
            codes: vec!["IMS1=0000000C".into()],
            messages: vec!["IMS1: DFS000I".into()],
        });
        assert_eq!(exit_code(&failure), EXIT_APPLICATION_FAILURE);
        assert_eq!(failure_messages(&failure), ["IMS1: DFS000I".to_string()]);
    }

    #[test]
    fn context_does_not_hide_the_classified_error() {
        let error = Err::<(), _>(ConfigError::UnknownProfile { name: "prod".into() })
            .context("failed to resolve the connection")
            .unwrap_err();
        assert_eq!(exit_code(&error), EXIT_INVALID_ARGUMENT);
    }

    #[test]
    fn unclassified_errors_are_generic() {
        let error = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&error), EXIT_GENERIC_FAILURE);
        assert!(failure_messages(&error).is_empty());
    }
}
