use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Fire-and-forget requests to the observation data source.
#[derive(Debug, Clone)]
pub struct Feed<E> {
    context: CapabilityContext<FeedOperation, E>,
}

impl<Ev> Capability<Ev> for Feed<Ev> {
    type Operation = FeedOperation;
    type MappedSelf<MappedEv> = Feed<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Feed::new(self.context.map_event(f))
    }
}

impl<E> Feed<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<FeedOperation, E>) -> Self {
        Self { context }
    }

    pub fn load_next_page(&self) {
        self.notify(FeedOperation::LoadNextPage);
    }

    pub fn sync(&self) {
        self.notify(FeedOperation::Sync);
    }

    fn notify(&self, operation: FeedOperation) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(operation).await;
        });
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op")]
pub enum FeedOperation {
    /// The list reached its end; fetch the next page if there is one.
    LoadNextPage,
    /// Pull remote observations and reconcile the local store.
    Sync,
}

impl Operation for FeedOperation {
    type Output = ();
}
