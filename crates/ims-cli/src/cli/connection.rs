use clap::Args;
use ims_config::{ConnectionConfig, Protocol};

/// Connection options accepted by every command.
///
/// Each flag overrides the matching field of the resolved profile.
#[derive(Clone, Debug, Default, Args)]
pub struct ConnectionArgs {
    /// Connection profile to use (defaults to general.default_profile)
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Host name of the IMS operations API
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port of the IMS operations API
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Mainframe user name
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Mainframe password
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Protocol: http or https
    #[arg(long, global = true, value_parser = parse_protocol)]
    pub protocol: Option<Protocol>,

    /// Path prefix of the REST API
    #[arg(long, global = true)]
    pub base_path: Option<String>,

    /// Reject self-signed certificates (true/false)
    #[arg(long, global = true)]
    pub reject_unauthorized: Option<bool>,

    /// IMS Connect host the API forwards commands to
    #[arg(long, global = true)]
    pub ims_connect_host: Option<String>,

    /// IMS Connect port
    #[arg(long, global = true)]
    pub ims_connect_port: Option<u16>,

    /// IMSplex name
    #[arg(long, global = true)]
    pub plex: Option<String>,
}

impl ConnectionArgs {
    /// Flags as a connection layer to overlay on the resolved profile.
    #[must_use]
    pub fn overrides(&self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
            protocol: self.protocol,
            base_path: self.base_path.clone(),
            reject_unauthorized: self.reject_unauthorized,
            ims_connect_host: self.ims_connect_host.clone(),
            ims_connect_port: self.ims_connect_port,
            plex: self.plex.clone(),
        }
    }
}

fn parse_protocol(raw: &str) -> Result<Protocol, String> {
    raw.parse::<Protocol>().map_err(|error| error.to_string())
}
