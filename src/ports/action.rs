// SPDX-License-Identifier: MIT OR Apache-2.0

//! Executable action trait definition.
//!
//! An `Action` is what an action factory produces from a serialized config. The
//! host's action runtime calls it with the context captured at the trigger site.

use crate::domain::Result;
use async_trait::async_trait;

/// An executable action produced by an action factory.
///
/// `AC` is the execution context handed over by the trigger that fired the
/// action, for example the clicked value in a chart.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use plugin_hooks::domain::Result;
/// use plugin_hooks::ports::Action;
///
/// struct Ping;
///
/// #[async_trait]
/// impl Action<String> for Ping {
///     fn id(&self) -> &str {
///         "ping-1"
///     }
///
///     fn action_type(&self) -> &str {
///         "ping"
///     }
///
///     fn display_name(&self) -> String {
///         "Ping".to_string()
///     }
///
///     async fn execute(&self, context: String) -> Result<()> {
///         println!("ping {}", context);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Action<AC>: Send + Sync
where
    AC: Send + 'static,
{
    /// The instance id. Actions created from serialized configs start with an
    /// empty id; the runtime assigns one when it attaches the action.
    fn id(&self) -> &str;

    /// The type of the action. For factory-made actions this is the factory id.
    fn action_type(&self) -> &str;

    /// The icon shown next to the action, if any.
    fn icon_type(&self) -> Option<String> {
        None
    }

    /// The human readable name of the action.
    fn display_name(&self) -> String;

    /// Runs the action.
    async fn execute(&self, context: AC) -> Result<()>;

    /// Whether the action can resolve a link target via [`Action::href`].
    fn supports_href(&self) -> bool {
        false
    }

    /// Resolves the link target for the action.
    ///
    /// Returns `Ok(None)` for actions that do not navigate.
    async fn href(&self, _context: AC) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAction {
        runs: AtomicUsize,
    }

    #[async_trait]
    impl Action<u32> for CountingAction {
        fn id(&self) -> &str {
            ""
        }

        fn action_type(&self) -> &str {
            "counter"
        }

        fn display_name(&self) -> String {
            "Counter".to_string()
        }

        async fn execute(&self, context: u32) -> Result<()> {
            self.runs.fetch_add(context as usize, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_defaults_have_no_href_or_icon() {
        let action = CountingAction {
            runs: AtomicUsize::new(0),
        };
        assert!(!action.supports_href());
        assert_eq!(action.icon_type(), None);
        assert_eq!(tokio_test::block_on(action.href(1)).unwrap(), None);
    }

    #[test]
    fn test_execute_receives_context() {
        let action = CountingAction {
            runs: AtomicUsize::new(0),
        };
        tokio_test::block_on(action.execute(3)).unwrap();
        tokio_test::block_on(action.execute(4)).unwrap();
        assert_eq!(action.runs.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_action_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<Box<dyn Action<u32>>>();
    }
}
