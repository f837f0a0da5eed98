use actix_multipart::form::tempfile::TempFile;
use actix_web::{http::header, web, web::Bytes, HttpMessage, HttpRequest};
use futures::Stream;
use serde::Deserialize;
use std::fmt::Display;

use crate::upload::adapter::incoming::web::sources::{MultipartSource, StreamSource};
use crate::upload::application::ports::outgoing::UploadedFile;

/// How the widget delivered the upload, which decides the response encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Raw body via XMLHttpRequest; answered with plain JSON.
    Xhr,
    /// Multipart form posted into a hidden iframe; answered with HTML-safe JSON.
    Iframe,
}

#[derive(Debug, Deserialize)]
struct UploadQuery {
    qqfile: Option<String>,
}

/// Request state the upload sources are built from.
#[derive(Default)]
pub struct RequestContext {
    pub qqfile: Option<String>,
    pub content_length: Option<u64>,
    pub is_multipart: bool,
    pub multipart_file: Option<TempFile>,
}

impl RequestContext {
    pub fn from_request(req: &HttpRequest) -> Self {
        let qqfile = web::Query::<UploadQuery>::from_query(req.query_string())
            .ok()
            .and_then(|query| query.into_inner().qqfile);

        let content_length = req
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        Self {
            qqfile,
            content_length,
            is_multipart: req.content_type().eq_ignore_ascii_case("multipart/form-data"),
            multipart_file: None,
        }
    }

    pub fn with_multipart_file(mut self, file: Option<TempFile>) -> Self {
        self.multipart_file = file;
        self
    }

    /// Whether the multipart form still has to be parsed to find the upload.
    pub fn wants_multipart_form(&self) -> bool {
        self.qqfile.is_none() && self.is_multipart
    }

    pub fn transport(&self) -> Transport {
        if self.wants_multipart_form() {
            Transport::Iframe
        } else {
            Transport::Xhr
        }
    }

    /// Picks the source variant: the `qqfile` query parameter wins, then the
    /// multipart field. `None` when the request carries no upload.
    pub fn into_source<S>(self, body: S) -> Option<UploadSource<S>> {
        if let Some(name) = self.qqfile {
            return Some(UploadSource::Stream(StreamSource::new(
                name,
                self.content_length,
                body,
            )));
        }

        self.multipart_file
            .map(|file| UploadSource::Multipart(MultipartSource::from_temp_file(file)))
    }
}

pub enum UploadSource<S> {
    Stream(StreamSource<S>),
    Multipart(MultipartSource),
}

impl<S, E> UploadSource<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Display,
{
    pub fn as_uploaded_file(&mut self) -> &mut dyn UploadedFile {
        match self {
            UploadSource::Stream(source) => source as &mut dyn UploadedFile,
            UploadSource::Multipart(source) => source as &mut dyn UploadedFile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use futures::stream;

    type Body = stream::Empty<Result<Bytes, String>>;

    #[test]
    fn reads_query_and_length() {
        let req = TestRequest::post()
            .uri("/api/upload?qqfile=my%20photo.png")
            .insert_header((header::CONTENT_LENGTH, "2048"))
            .to_http_request();

        let context = RequestContext::from_request(&req);

        assert_eq!(context.qqfile.as_deref(), Some("my photo.png"));
        assert_eq!(context.content_length, Some(2048));
        assert!(!context.is_multipart);
        assert_eq!(context.transport(), Transport::Xhr);
    }

    #[test]
    fn unparsable_length_counts_as_missing() {
        let req = TestRequest::post()
            .uri("/api/upload?qqfile=a.txt")
            .insert_header((header::CONTENT_LENGTH, "lots"))
            .to_http_request();

        assert_eq!(RequestContext::from_request(&req).content_length, None);
    }

    #[test]
    fn multipart_request_uses_iframe_transport() {
        let req = TestRequest::post()
            .uri("/api/upload")
            .insert_header((header::CONTENT_TYPE, "multipart/form-data; boundary=xyz"))
            .to_http_request();

        let context = RequestContext::from_request(&req);

        assert!(context.wants_multipart_form());
        assert_eq!(context.transport(), Transport::Iframe);
    }

    #[test]
    fn query_parameter_selects_stream_source() {
        let context = RequestContext {
            qqfile: Some("a.txt".to_string()),
            content_length: Some(3),
            ..Default::default()
        };

        let mut source = context.into_source::<Body>(stream::empty()).unwrap();
        assert!(matches!(source, UploadSource::Stream(_)));
        assert_eq!(source.as_uploaded_file().name(), "a.txt");
    }

    #[test]
    fn multipart_field_selects_multipart_source() {
        let temp = TempFile {
            file: tempfile::NamedTempFile::new().unwrap(),
            content_type: None,
            file_name: Some("cat.jpg".to_string()),
            size: 5,
        };
        let context = RequestContext::default().with_multipart_file(Some(temp));

        let mut source = context.into_source::<Body>(stream::empty()).unwrap();
        assert!(matches!(source, UploadSource::Multipart(_)));
        assert_eq!(source.as_uploaded_file().size(), Ok(5));
    }

    #[test]
    fn no_carrier_means_no_source() {
        let context = RequestContext::default();
        assert!(context.into_source::<Body>(stream::empty()).is_none());
    }
}
