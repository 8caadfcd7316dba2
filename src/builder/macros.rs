//! Macros for ergonomic state and event definitions.

/// Generate a state enum and its State trait implementation.
///
/// Each variant may carry a display label with `as "label"`; the label is
/// used by `name()` and as the serde name. Unlabeled variants use their
/// identifier. An `ALL` constant lists every variant in declaration order.
///
/// # Example
///
/// ```
/// use gumball::core::State;
/// use gumball::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start as "start",
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Start.name(), "start");
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// assert_eq!(WorkflowState::Done.name(), "Done");
/// assert_eq!(WorkflowState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__variant_label!($variant $(, $label)?)),*
                }
            }
        }
    };
}

/// Generate an event enum with its Event trait and `FromStr` implementations.
///
/// Labels work as in [`state_enum!`]: `as "LABEL"` sets the name used for
/// display, parsing and serde.
///
/// # Example
///
/// ```
/// use gumball::core::Event;
/// use gumball::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Open as "OPEN",
///         Close as "CLOSE",
///     }
/// }
///
/// assert_eq!(DoorEvent::Open.name(), "OPEN");
/// assert_eq!("CLOSE".parse::<DoorEvent>().unwrap(), DoorEvent::Close);
/// assert!("SLAM".parse::<DoorEvent>().is_err());
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__variant_label!($variant $(, $label)?)),*
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseEventError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|event| $crate::core::Event::name(event) == s)
                    .ok_or_else(|| $crate::core::ParseEventError::new(s))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_label {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $label:literal) => {
        $label
    };
}
