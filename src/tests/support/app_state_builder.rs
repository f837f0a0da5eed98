use actix_web::web;
use std::path::PathBuf;
use std::sync::Arc;

use crate::tests::support::fixtures::StaticServerLimits;
use crate::upload::adapter::outgoing::local_file_store::LocalFileStore;
use crate::upload::application::domain::policies::upload_policy::UploadPolicy;
use crate::upload::application::services::{HandleUploadService, ServerSettingsService};
use crate::upload::application::upload_use_cases::UploadUseCases;
use crate::AppState;

/// Builds an [`AppState`] backed by the real services and a local directory.
pub struct TestAppStateBuilder {
    policy: UploadPolicy,
    limits: StaticServerLimits,
}

impl TestAppStateBuilder {
    pub fn new(upload_directory: impl Into<PathBuf>) -> Self {
        Self {
            policy: UploadPolicy::new(upload_directory),
            limits: StaticServerLimits::new("64M", "64M"),
        }
    }

    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_replace_old_file(mut self, replace: bool) -> Self {
        self.policy.replace_old_file = replace;
        self
    }

    pub fn with_server_limits(mut self, post_max_size: &str, upload_max_filesize: &str) -> Self {
        self.limits = StaticServerLimits::new(post_max_size, upload_max_filesize);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let handle_upload = HandleUploadService::new(
            ServerSettingsService::new(self.limits.clone()),
            LocalFileStore,
        );

        web::Data::new(AppState {
            upload: UploadUseCases {
                handle_upload: Arc::new(handle_upload),
                check_server_settings: Arc::new(ServerSettingsService::new(self.limits)),
            },
            upload_policy: self.policy,
            file_store: Arc::new(LocalFileStore),
        })
    }
}
