//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::config::Config) from identifiers.
///
/// State and event names are written as bare identifiers and stringified.
/// A state with no outgoing transitions is written `name => {}`.
///
/// # Example
///
/// ```
/// use rewind::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { pause => idle, finish => done },
///         done => {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => {
                    $( $event:ident => $target:ident ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::config::StateMap::new();
        $(
            #[allow(unused_mut)]
            let mut def = $crate::config::StateDef::new();
            $(
                def.transitions.insert(
                    $crate::core::EventId::from(stringify!($event)),
                    $crate::core::StateId::from(stringify!($target)),
                );
            )*
            states.insert($crate::core::StateId::from(stringify!($state)), def);
        )*
        $crate::config::Config {
            initial: $crate::core::StateId::from(stringify!($initial)),
            states,
        }
    }};
}
