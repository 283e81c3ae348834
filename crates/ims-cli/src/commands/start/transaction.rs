use ims_client::{ClientError, ImsRestClient, ResponseEnvelope};
use ims_core::UpdateTransactionParams;

use crate::cli::subcommands::start::StartTransactionArgs;
use crate::commands::shared::CommandHandler;
use crate::context::AppContext;
use crate::messages::ResourceMessages;

pub struct StartTransaction {
    params: UpdateTransactionParams,
}

impl From<&StartTransactionArgs> for StartTransaction {
    fn from(args: &StartTransactionArgs) -> Self {
        Self {
            params: UpdateTransactionParams {
                names: Some(args.names.clone()),
                start: args.attributes.clone(),
                stop: None,
                route: args.route.clone(),
            },
        }
    }
}

impl CommandHandler for StartTransaction {
    fn messages<'a>(&self, ctx: &'a AppContext) -> &'a ResourceMessages {
        &ctx.messages.start.transaction
    }

    fn targets(&self) -> String {
        self.params.names.as_deref().unwrap_or_default().join(", ")
    }

    async fn handle(&self, client: &ImsRestClient) -> Result<ResponseEnvelope, ClientError> {
        client.start_transaction(&self.params).await
    }
}
