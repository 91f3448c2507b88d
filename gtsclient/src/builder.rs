use clap::Parser;
use crate::{
    error::ClientError,
    http::HttpPlatform,
};

/// Where the reference backend listens when run locally.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";

#[derive(Clone, Debug, Parser)]
pub struct Builder {
    #[clap(
        long,
        value_name = "GTS_API_URL",
        env = "GTS_API_URL",
        default_value = DEFAULT_API_URL,
    )]
    pub gts_api_url: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            gts_api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gts_api_url(mut self, value: String) -> Self {
        self.gts_api_url = value;
        self
    }

    pub fn build(self) -> Result<HttpPlatform, ClientError> {
        HttpPlatform::new(self.gts_api_url)
    }
}

#[cfg(test)]
mod test {
    use gtscore::platform::PlatformUrl;
    use super::*;

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let platform = Builder::new().build()?;
        assert_eq!(platform.url(), DEFAULT_API_URL);
        Ok(())
    }

    #[test]
    fn trailing_slash() -> anyhow::Result<()> {
        let platform = Builder::new()
            .gts_api_url("http://theses.example.com:8080/".to_string())
            .build()?;
        assert_eq!(platform.url(), "http://theses.example.com:8080");
        assert_eq!(
            platform.endpoint("persons/3/theses"),
            "http://theses.example.com:8080/api/persons/3/theses",
        );
        Ok(())
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            Builder::new().gts_api_url("not a url".to_string()).build(),
            Err(ClientError::InvalidUrl(..)),
        ));
    }
}
