//! Resources needed to get a single folder

use super::Folder;
use crate::client::HttpClient;
use crate::error::Error;
use crate::options::CallOptions;
use crate::prelude::HttpCommand;

/// Command to get a single folder
///
/// Executing this command will return a [`Folder`](crate::folder::Folder) on success.
///
/// [More about it on the documentation](https://developer.vimeo.com/api/reference/folders#get_folder).
///
/// # Example using the [`HttpClient`](crate::client::HttpClient)
///
/// ```
/// use vimeo::client::HttpClientBuilder;
/// use vimeo::credentials::Credentials;
/// use vimeo::folder::get::FolderGetCommand;
/// use vimeo::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::default()
///     .with_credentials(Credentials::access_token("my-token"))
///     .build()
///     .unwrap();
/// let cmd = FolderGetCommand::new(12345);
/// match cmd.execute(&client).await {
///   Ok(res) => println!("folder {}", res.name),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct FolderGetCommand {
    pub folder_id: u64,
    pub options: CallOptions,
}

impl FolderGetCommand {
    pub fn new(folder_id: u64) -> Self {
        Self {
            folder_id,
            options: CallOptions::default(),
        }
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
impl HttpCommand for FolderGetCommand {
    type Output = Folder;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        client
            .get_request(&format!("folders/{}", self.folder_id), &self.options)
            .await
    }
}
