/// Generates the valued and nested setter for each operator.
///
/// `greater(v)` sets the tail's operator and bound value. `greater_nested()`
/// sets only the operator, leaving the operand to the next chained condition.
macro_rules! operator_setters {
    ($($(#[$meta:meta])* $name:ident, $nested:ident => $op:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(self, value: impl Into<model::core::value::Value>) -> Self {
                self.apply($op, Some(value.into()))
            }

            $(#[$meta])*
            pub fn $nested(self) -> Self {
                self.apply($op, None)
            }
        )*
    };
}

pub(crate) use operator_setters;
