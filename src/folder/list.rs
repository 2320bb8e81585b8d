//! Resources needed to list the existing folders

use super::Folder;
use crate::client::HttpClient;
use crate::error::Error;
use crate::options::CallOptions;
use crate::pagination::Page;
use crate::prelude::HttpCommand;

/// Command to list the existing folders
///
/// Executing this command will return a [`Page`](crate::pagination::Page) of [`Folder`](crate::folder::Folder) on success.
///
/// [More about it on the documentation](https://developer.vimeo.com/api/reference/folders#get_folders).
///
/// # Example using the [`HttpClient`](crate::client::HttpClient)
///
/// ```
/// use vimeo::client::HttpClientBuilder;
/// use vimeo::credentials::Credentials;
/// use vimeo::folder::list::FolderListCommand;
/// use vimeo::options::CallOptions;
/// use vimeo::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::default()
///     .with_credentials(Credentials::access_token("my-token"))
///     .build()
///     .unwrap();
/// let cmd = FolderListCommand::new().with_options(CallOptions::default().with_page(1));
/// match cmd.execute(&client).await {
///   Ok(res) => println!("{} folders in total", res.total),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug, Default)]
pub struct FolderListCommand {
    pub options: CallOptions,
}

impl FolderListCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&mut self, value: CallOptions) {
        self.options = value;
    }

    pub fn with_options(mut self, value: CallOptions) -> Self {
        self.set_options(value);
        self
    }
}

#[async_trait::async_trait]
impl HttpCommand for FolderListCommand {
    type Output = Page<Folder>;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        client.get_request("folders", &self.options).await
    }
}
