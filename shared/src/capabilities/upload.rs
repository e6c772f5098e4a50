use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bridge to the shell's upload pipeline. The core only asks for a batch to
/// start; progress is pushed back as `Event::UploadStatusChanged`.
#[derive(Debug, Clone)]
pub struct Upload<E> {
    context: CapabilityContext<UploadOperation, E>,
}

impl<Ev> Capability<Ev> for Upload<Ev> {
    type Operation = UploadOperation;
    type MappedSelf<MappedEv> = Upload<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Upload::new(self.context.map_event(f))
    }
}

impl<E> Upload<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<UploadOperation, E>) -> Self {
        Self { context }
    }

    pub fn start_batch<F>(&self, callback: F)
    where
        F: FnOnce(UploadResult) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let result = ctx.request_from_shell(UploadOperation::StartBatch).await;
            ctx.update_app(callback(result));
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op")]
pub enum UploadOperation {
    StartBatch,
}

impl Operation for UploadOperation {
    type Output = UploadResult;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadStatus {
    pub in_progress: bool,
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum UploadError {
    #[error("not signed in")]
    NotAuthenticated,

    #[error("nothing queued for upload")]
    NothingToUpload,

    #[error("an upload batch is already running")]
    AlreadyRunning,

    #[error("device is offline")]
    Offline,

    #[error("upload failed: {reason}")]
    Failed {
        reason: String,
        #[serde(default)]
        is_retryable: bool,
    },
}

impl UploadError {
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Offline => true,
            Self::Failed { is_retryable, .. } => *is_retryable,
            Self::NotAuthenticated | Self::NothingToUpload | Self::AlreadyRunning => false,
        }
    }
}

pub type UploadResult = Result<UploadStatus, UploadError>;
