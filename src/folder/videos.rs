//! Resources needed to list the videos contained in a folder

use crate::client::HttpClient;
use crate::error::Error;
use crate::options::CallOptions;
use crate::pagination::Page;
use crate::prelude::HttpCommand;
use crate::video::Video;

/// Command to list the videos contained in a folder
///
/// Executing this command will return a [`Page`](crate::pagination::Page) of [`Video`](crate::video::Video) on success.
///
/// [More about it on the documentation](https://developer.vimeo.com/api/reference/folders#get_folder_videos).
///
/// # Example using the [`HttpClient`](crate::client::HttpClient)
///
/// ```
/// use vimeo::client::HttpClientBuilder;
/// use vimeo::credentials::Credentials;
/// use vimeo::folder::videos::FolderVideosCommand;
/// use vimeo::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::default()
///     .with_credentials(Credentials::access_token("my-token"))
///     .build()
///     .unwrap();
/// let cmd = FolderVideosCommand::new(12345);
/// match cmd.execute(&client).await {
///   Ok(res) => println!("{} videos in the folder", res.total),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct FolderVideosCommand {
    pub folder_id: u64,
    pub options: CallOptions,
}

impl FolderVideosCommand {
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
impl HttpCommand for FolderVideosCommand {
    type Output = Page<Video>;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        client
            .get_request(&format!("folders/{}/videos", self.folder_id), &self.options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::FolderVideosCommand;
    use crate::client::HttpClient;
    use crate::credentials::Credentials;
    use crate::options::CallOptions;
    use crate::prelude::HttpCommand;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/folders/12345/videos")
            .match_header("authorization", "Bearer access-token")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("per_page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "total": 1,
    "page": 1,
    "per_page": 2,
    "data": [
        {
            "uri": "/videos/531191105",
            "name": "Launch teaser",
            "link": "https://vimeo.com/531191105",
            "duration": 31,
            "width": 1920,
            "height": 1080,
            "created_time": "2021-03-25T11:29:36+00:00",
            "status": "available",
            "resource_key": "8c0d6e3a1b2c3d4e5f6a7b8c9e5ad8b1f7a4f52b"
        }
    ]
}"#,
            )
            .create();
        let creds = Credentials::access_token("access-token");
        let api = HttpClient::new(creds, server.url());
        let options = CallOptions::default().with_page(1).with_per_page(2);
        let payload = FolderVideosCommand::new(12345)
            .with_options(options)
            .execute(&api)
            .await
            .unwrap();
        assert_eq!(payload.total, 1);
        assert_eq!(payload.data[0].name, "Launch teaser");
        assert_eq!(payload.data[0].duration, 31);
        assert!(!payload.has_more());
        m.assert();
    }

    #[tokio::test]
    async fn error() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/folders/12345/videos")
            .match_header("authorization", "Bearer access-token")
            .with_status(500)
            .with_body(r#"{"error": "Something went wrong."}"#)
            .create();
        let creds = Credentials::access_token("access-token");
        let api = HttpClient::new(creds, server.url());
        let error = FolderVideosCommand::new(12345)
            .execute(&api)
            .await
            .unwrap_err();
        assert!(matches!(error, crate::error::Error::Protocol(500, _)));
        m.assert();
    }
}
