use crate::client::HttpClient;
use crate::error::Error;

#[async_trait::async_trait]
pub trait HttpCommand {
    type Output;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error>;
}
