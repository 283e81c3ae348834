use ims_client::{ClientError, ImsRestClient, ResponseEnvelope};
use ims_core::UpdateProgramParams;

use crate::cli::subcommands::start::StartProgramArgs;
use crate::commands::shared::CommandHandler;
use crate::context::AppContext;
use crate::messages::ResourceMessages;

pub struct StartProgram {
    params: UpdateProgramParams,
}

impl From<&StartProgramArgs> for StartProgram {
    fn from(args: &StartProgramArgs) -> Self {
        Self {
            params: UpdateProgramParams {
                names: Some(args.names.clone()),
                start: args.attributes.clone(),
                stop: None,
                route: args.route.clone(),
            },
        }
    }
}

impl CommandHandler for StartProgram {
    fn messages<'a>(&self, ctx: &'a AppContext) -> &'a ResourceMessages {
        &ctx.messages.start.program
    }

    fn targets(&self) -> String {
        self.params.names.as_deref().unwrap_or_default().join(", ")
    }

    async fn handle(&self, client: &ImsRestClient) -> Result<ResponseEnvelope, ClientError> {
        client.start_program(&self.params).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::StartProgram;
    use crate::cli::subcommands::start::StartProgramArgs;
    use crate::commands::shared::CommandHandler;

    #[test]
    fn attributes_become_start_keywords() {
        let command = StartProgram::from(&StartProgramArgs {
            names: vec!["PGM1".into(), "PGM2".into()],
            attributes: Some(vec!["TRACE".into()]),
            route: Some(vec!["IMS1".into()]),
        });

        assert_eq!(command.params.start, Some(vec!["TRACE".to_string()]));
        assert_eq!(command.params.stop, None);
        assert_eq!(command.params.route, Some(vec!["IMS1".to_string()]));
        assert_eq!(command.targets(), "PGM1, PGM2");
    }
}
