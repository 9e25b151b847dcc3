use std::sync::Arc;




#[derive(Debug, PartialEq, Clone)]
pub enum Transformed<T> {
    Yes(T),
    No(T)
}

impl<T> Transformed<T> {
    pub fn get_plan(self) -> T {
        match self {
            Transformed::Yes(plan) | Transformed::No(plan) => plan,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Transformed::Yes(_))
    }
}

impl<P: ?Sized> Transformed<Arc<P>> {
    /// A pass that found nothing to rewrite hands back the very same `Arc`.
    pub fn compare(before: &Arc<P>, after: Arc<P>) -> Self {
        if Arc::ptr_eq(before, &after) {
            Transformed::No(after)
        } else {
            Transformed::Yes(after)
        }
    }
}
