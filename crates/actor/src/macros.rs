/// Defines an actor state type together with a typed wrapper around its
/// [`crate::Actor`] handle.
///
/// ```ignore
/// define_actor! {
///     /// Docs for the wrapper.
///     pub struct Counter => #[derive(Default)] struct CounterState {
///         value: u32,
///     }
/// }
/// ```
///
/// The state type keeps the visibility of the invoking module, so only that
/// module (and its children) can construct or spawn it. The wrapper gets
/// private `spawn` and `handle` helpers and a `Clone` impl; add your own
/// `impl` blocks for the public API.
#[macro_export]
macro_rules! define_actor {
    {
        $(#[$wrapper_attr:meta])*
        $v:vis struct $wrapper:ident =>
        $(#[$state_attr:meta])*
        struct $state:ident {
            $($fields:tt)*
        }
    } => {
        $(#[$state_attr])*
        struct $state {
            $($fields)*
        }

        $(#[$wrapper_attr])*
        $v struct $wrapper {
            handle: $crate::Actor<$state>,
        }

        #[allow(dead_code)]
        impl $wrapper {
            #[inline]
            fn spawn(state: $state, label: Option<&str>) -> Self {
                Self {
                    handle: $crate::Actor::spawn(state, label),
                }
            }

            #[inline]
            fn handle(&self) -> &$crate::Actor<$state> {
                &self.handle
            }
        }

        impl Clone for $wrapper {
            #[inline]
            fn clone(&self) -> Self {
                Self {
                    handle: self.handle.clone(),
                }
            }
        }
    };
}
