use ims_client::{ClientError, ImsRestClient, ResponseEnvelope};
use ims_core::UpdateTransactionParams;

use crate::cli::subcommands::stop::StopTransactionArgs;
use crate::commands::shared::CommandHandler;
use crate::context::AppContext;
use crate::messages::ResourceMessages;

pub struct StopTransaction {
    params: UpdateTransactionParams,
}

impl From<&StopTransactionArgs> for StopTransaction {
    fn from(args: &StopTransactionArgs) -> Self {
        Self {
            params: UpdateTransactionParams {
                names: Some(args.names.clone()),
                start: None,
                stop: args.attributes.clone(),
                route: args.route.clone(),
            },
        }
    }
}

impl CommandHandler for StopTransaction {
    fn messages<'a>(&self, ctx: &'a AppContext) -> &'a ResourceMessages {
        &ctx.messages.stop.transaction
    }

    fn targets(&self) -> String {
        self.params.names.as_deref().unwrap_or_default().join(", ")
    }

    async fn handle(&self, client: &ImsRestClient) -> Result<ResponseEnvelope, ClientError> {
        client.stop_transaction(&self.params).await
    }
}
