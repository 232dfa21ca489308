//! Harness configuration.

use bon::Builder;
use clap::Args;
use derive_more::Debug;
use url::Url;

/// Settings the harness receives at construction.
///
/// Nothing in the harness reads configuration from global state; the CLI
/// parses this from arguments and the environment, tests build it directly.
#[derive(Clone, Args, Debug, Builder)]
pub struct Config {
    /// Base URL of the courier account service.
    #[arg(long = "base-url", env = "COURIER_BASE_URL")]
    #[debug("{base_url}")]
    pub base_url: Url,

    /// Write raw response bodies to the diagnostic log.
    #[arg(long, env = "COURIER_VERBOSE", default_value_t = false)]
    #[builder(default)]
    pub verbose: bool,
}

impl Config {
    /// The base URL, guaranteed to end in a slash so endpoint paths join onto
    /// it rather than replacing its last segment.
    pub fn endpoint_base(&self) -> Url {
        with_trailing_slash(self.base_url.clone())
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
