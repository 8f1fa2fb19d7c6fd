//! Macros for ergonomic machine declaration.

/// Declare a machine definition as a state/transition table.
///
/// Expands to a [`MachineBuilder`](crate::definition::MachineBuilder)
/// invocation and yields `Result<MachineDefinition, BuildError>`. Only
/// plain edges are expressible here; guarded or internal transitions go
/// through the builder directly.
///
/// # Example
///
/// ```
/// use statescope::machine;
///
/// let toggle = machine! {
///     id: "toggle",
///     initial: "inactive",
///     "inactive" => { "TOGGLE" => "active" },
///     "active" => { "TOGGLE" => "inactive" },
/// }
/// .unwrap();
///
/// assert_eq!(toggle.id(), "toggle");
/// ```
#[macro_export]
macro_rules! machine {
    (
        id: $id:expr,
        initial: $initial:expr,
        $(
            $source:literal => { $( $event:literal => $target:literal ),* $(,)? }
        ),* $(,)?
    ) => {{
        let builder = $crate::definition::MachineBuilder::new($id).initial($initial);
        $(
            $(
                let builder = builder.on($source, $event, $target);
            )*
        )*
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateValue;

    #[test]
    fn machine_macro_builds_a_table() {
        let lights = machine! {
            id: "trafficLight",
            initial: "green",
            "green" => { "NEXT" => "yellow" },
            "yellow" => { "NEXT" => "red" },
            "red" => { "NEXT" => "green" },
        }
        .unwrap();

        assert_eq!(lights.id(), "trafficLight");
        assert_eq!(lights.initial(), &StateValue::from("green"));
        assert_eq!(lights.transitions().len(), 3);
    }

    #[test]
    fn machine_macro_supports_multiple_events_per_state() {
        let definition = machine! {
            id: "door",
            initial: "closed",
            "closed" => { "OPEN" => "open", "LOCK" => "locked" },
            "open" => { "CLOSE" => "closed" },
            "locked" => { "UNLOCK" => "closed" },
        }
        .unwrap();

        assert_eq!(definition.transitions().len(), 4);
    }

    #[test]
    fn machine_macro_surfaces_build_errors() {
        let result = machine! {
            id: "empty",
            initial: "only",
        };

        assert!(result.is_err());
    }
}
