use ims_client::{ClientError, ImsRestClient, ResponseEnvelope};
use ims_core::StartRegionParams;

use crate::cli::subcommands::start::StartRegionArgs;
use crate::commands::shared::CommandHandler;
use crate::context::AppContext;
use crate::messages::ResourceMessages;

pub struct StartRegion {
    params: StartRegionParams,
}

impl From<&StartRegionArgs> for StartRegion {
    fn from(args: &StartRegionArgs) -> Self {
        Self {
            params: StartRegionParams {
                member_name: Some(args.member_names.clone()).filter(|names| !names.is_empty()),
                local: args.local.then_some(true),
                job_name: args.job_name.clone(),
                route: args.route.clone(),
            },
        }
    }
}

impl CommandHandler for StartRegion {
    fn messages<'a>(&self, ctx: &'a AppContext) -> &'a ResourceMessages {
        &ctx.messages.start.region
    }

    fn targets(&self) -> String {
        match (&self.params.member_name, &self.params.job_name) {
            (Some(members), _) => members.join(", "),
            (None, Some(job_name)) => job_name.clone(),
            (None, None) => "default member".to_string(),
        }
    }

    async fn handle(&self, client: &ImsRestClient) -> Result<ResponseEnvelope, ClientError> {
        client.start_region(&self.params).await
    }
}
