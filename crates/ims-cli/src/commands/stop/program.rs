use ims_client::{ClientError, ImsRestClient, ResponseEnvelope};
use ims_core::UpdateProgramParams;

use crate::cli::subcommands::stop::StopProgramArgs;
use crate::commands::shared::CommandHandler;
use crate::context::AppContext;
use crate::messages::ResourceMessages;

pub struct StopProgram {
    params: UpdateProgramParams,
}

impl From<&StopProgramArgs> for StopProgram {
    fn from(args: &StopProgramArgs) -> Self {
        Self {
            params: UpdateProgramParams {
                names: Some(args.names.clone()),
                start: None,
                stop: args.attributes.clone(),
                route: args.route.clone(),
            },
        }
    }
}

impl CommandHandler for StopProgram {
    fn messages<'a>(&self, ctx: &'a AppContext) -> &'a ResourceMessages {
        &ctx.messages.stop.program
    }

    fn targets(&self) -> String {
        self.params.names.as_deref().unwrap_or_default().join(", ")
    }

    async fn handle(&self, client: &ImsRestClient) -> Result<ResponseEnvelope, ClientError> {
        client.stop_program(&self.params).await
    }
}
