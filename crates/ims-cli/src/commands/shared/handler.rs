use ims_client::{ClientError, ImsRestClient, ResponseEnvelope};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::session::open_client;
use crate::context::AppContext;
use crate::messages::{ResourceMessages, render};
use crate::output::output;
use crate::progress::Progress;

/// One start or stop leaf command: a parameter bag bound to the API call
/// that sends it.
pub(crate) trait CommandHandler {
    /// Spinner and success text of this command.
    fn messages<'a>(&self, ctx: &'a AppContext) -> &'a ResourceMessages;

    /// Resources named in the success line.
    fn targets(&self) -> String;

    async fn handle(&self, client: &ImsRestClient) -> Result<ResponseEnvelope, ClientError>;
}

/// Open a session, send the request, check the embedded completion codes and
/// render the response data.
pub(crate) async fn run<H: CommandHandler>(
    handler: &H,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = open_client(ctx)?;
    let messages = handler.messages(ctx);

    let progress = Progress::spinner(&messages.status);
    let result = handler.handle(&client).await;
    match &result {
        Ok(_) => progress.finish_clear(),
        Err(error) => progress.finish_err(&error.to_string()),
    }
    let response = result?;

    for message in &response.messages {
        tracing::info!("{message}");
    }
    response.check_return_code()?;

    output(&response.data, flags.format)?;
    if !flags.quiet && flags.format != OutputFormat::Raw {
        let targets = handler.targets();
        println!("{}", render(&messages.success, &[("names", targets.as_str())]));
    }
    Ok(())
}
