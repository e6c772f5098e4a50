use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Lightweight channel for per-frame values. Shells apply these to an
/// animated value directly instead of re-rendering the view model.
#[derive(Debug, Clone)]
pub struct Animation<E> {
    context: CapabilityContext<AnimationOperation, E>,
}

impl<Ev> Capability<Ev> for Animation<Ev> {
    type Operation = AnimationOperation;
    type MappedSelf<MappedEv> = Animation<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Animation::new(self.context.map_event(f))
    }
}

impl<E> Animation<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<AnimationOperation, E>) -> Self {
        Self { context }
    }

    pub fn translate_header(&self, translate_y: f64) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(AnimationOperation::TranslateHeader { translate_y })
                .await;
        });
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op")]
pub enum AnimationOperation {
    TranslateHeader { translate_y: f64 },
}

impl Operation for AnimationOperation {
    type Output = ();
}
