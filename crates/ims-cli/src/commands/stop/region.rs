use ims_client::{ClientError, ImsRestClient, ResponseEnvelope};
use ims_core::StopRegionParams;

use crate::cli::subcommands::stop::StopRegionArgs;
use crate::commands::shared::CommandHandler;
use crate::context::AppContext;
use crate::messages::ResourceMessages;

pub struct StopRegion {
    params: StopRegionParams,
}

impl From<&StopRegionArgs> for StopRegion {
    fn from(args: &StopRegionArgs) -> Self {
        Self {
            params: StopRegionParams {
                reg_num: args.region_ids.clone(),
                job_name: args.job_name.clone(),
                abdump: args.abdump.clone(),
                transaction: args.transaction.clone(),
                cancel: args.cancel,
            },
        }
    }
}

impl CommandHandler for StopRegion {
    fn messages<'a>(&self, ctx: &'a AppContext) -> &'a ResourceMessages {
        &ctx.messages.stop.region
    }

    fn targets(&self) -> String {
        match (&self.params.reg_num, &self.params.job_name) {
            (Some(numbers), _) => numbers
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            (None, Some(job_name)) => job_name.clone(),
            (None, None) => String::new(),
        }
    }

    async fn handle(&self, client: &ImsRestClient) -> Result<ResponseEnvelope, ClientError> {
        client.stop_region(&self.params).await
    }
}
