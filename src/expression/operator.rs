use crate::foundation::error::{StyleError, StyleResult};
use std::fmt;
use std::str::FromStr;

/// Catalog grouping of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `rgb`, `rgba`, `to-rgba`.
    Color,
    /// Comparisons, boolean combinators and branching.
    Decision,
    /// Accessors for the current feature.
    FeatureData,
    /// `heatmap-density`.
    Heatmap,
    /// Array and object access.
    Lookup,
    /// Arithmetic, constants and elementary functions.
    Math,
    /// String manipulation.
    String,
    /// Literals, assertions and conversions.
    Types,
    /// `let` / `var`.
    VariableBinding,
    /// `zoom`.
    Zoom,
    /// `step`, `interpolate` and interpolation type descriptors.
    Ramps,
}

impl Category {
    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Decision => "decision",
            Self::FeatureData => "feature data",
            Self::Heatmap => "heatmap",
            Self::Lookup => "lookup",
            Self::Math => "math",
            Self::String => "string",
            Self::Types => "types",
            Self::VariableBinding => "variable binding",
            Self::Zoom => "zoom",
            Self::Ramps => "ramps",
        }
    }
}

/// Documented operand count range of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    /// Minimum operand count.
    pub min: usize,
    /// Maximum operand count, `None` when unbounded.
    pub max: Option<usize>,
}

impl Arity {
    /// Exactly `n` operands.
    pub const fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    /// `n` or more operands.
    pub const fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    /// Between `min` and `max` operands, inclusive.
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Return `true` when `count` operands are allowed.
    pub fn accepts(self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "exactly {max}"),
            Some(max) => write!(f, "{}..={max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}

macro_rules! operator_table {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $name:literal, $category:ident, $arity:expr;
        )*
    ) => {
        /// Known operator vocabulary.
        ///
        /// Construction never requires a vocabulary entry; this enum backs the typed catalog,
        /// name lookups and strict validation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operator {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Operator {
            /// Every known operator, in catalog order.
            pub const ALL: &'static [Operator] = &[$(Operator::$variant),*];

            /// Wire name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Operator::$variant => $name,)*
                }
            }

            /// Catalog category.
            pub const fn category(self) -> Category {
                match self {
                    $(Operator::$variant => Category::$category,)*
                }
            }

            /// Documented operand count range.
            pub const fn arity(self) -> Arity {
                match self {
                    $(Operator::$variant => $arity,)*
                }
            }

            /// Reverse lookup by wire name.
            pub fn lookup(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Operator::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

operator_table! {
    // Color
    /// `rgb`: color from red, green and blue components in `0..=255`.
    Rgb => "rgb", Color, Arity::exactly(3);
    /// `rgba`: color from red, green, blue in `0..=255` and alpha in `0..=1`.
    Rgba => "rgba", Color, Arity::exactly(4);
    /// `to-rgba`: four-element `[r, g, b, a]` array of a color.
    ToRgba => "to-rgba", Color, Arity::exactly(1);

    // Decision
    /// `==`
    Eq => "==", Decision, Arity::exactly(2);
    /// `!=`
    Neq => "!=", Decision, Arity::exactly(2);
    /// `>`
    Gt => ">", Decision, Arity::exactly(2);
    /// `<`
    Lt => "<", Decision, Arity::exactly(2);
    /// `>=`
    Gte => ">=", Decision, Arity::exactly(2);
    /// `<=`
    Lte => "<=", Decision, Arity::exactly(2);
    /// `all`: `true` when every input is `true`.
    All => "all", Decision, Arity::at_least(0);
    /// `any`: `true` when at least one input is `true`.
    Any => "any", Decision, Arity::at_least(0);
    /// `!`: logical negation.
    Not => "!", Decision, Arity::exactly(1);
    /// `case`: condition/output pairs followed by a fallback.
    Case => "case", Decision, Arity::at_least(1);
    /// `match`: input, at least one label/output pair and a fallback.
    Match => "match", Decision, Arity::at_least(4);
    /// `coalesce`: first non-null input.
    Coalesce => "coalesce", Decision, Arity::at_least(1);

    // Feature data
    /// `properties`: the feature properties object.
    Properties => "properties", FeatureData, Arity::exactly(0);
    /// `geometry-type`: the feature geometry type name.
    GeometryType => "geometry-type", FeatureData, Arity::exactly(0);
    /// `id`: the feature id.
    Id => "id", FeatureData, Arity::exactly(0);

    // Heatmap
    /// `heatmap-density`: kernel density estimate of the current heatmap pixel.
    HeatmapDensity => "heatmap-density", Heatmap, Arity::exactly(0);

    // Lookup
    /// `at`: array item by index.
    At => "at", Lookup, Arity::exactly(2);
    /// `get`: property of the feature or of an explicit object.
    Get => "get", Lookup, Arity::between(1, 2);
    /// `has`: presence test on the feature or on an explicit object.
    Has => "has", Lookup, Arity::between(1, 2);
    /// `length`: length of an array or string.
    Length => "length", Lookup, Arity::exactly(1);

    // Math
    /// `ln2`: the constant ln(2).
    Ln2 => "ln2", Math, Arity::exactly(0);
    /// `pi`: the constant pi.
    Pi => "pi", Math, Arity::exactly(0);
    /// `e`: the constant e.
    E => "e", Math, Arity::exactly(0);
    /// `+`: sum.
    Sum => "+", Math, Arity::at_least(1);
    /// `*`: product.
    Product => "*", Math, Arity::at_least(1);
    /// `-`: difference, or negation with one operand.
    Subtract => "-", Math, Arity::between(1, 2);
    /// `/`: floating point division.
    Division => "/", Math, Arity::between(1, 2);
    /// `%`: remainder.
    Mod => "%", Math, Arity::between(1, 2);
    /// `^`: power.
    Pow => "^", Math, Arity::between(1, 2);
    /// `sqrt`
    Sqrt => "sqrt", Math, Arity::exactly(1);
    /// `log10`
    Log10 => "log10", Math, Arity::exactly(1);
    /// `ln`
    Ln => "ln", Math, Arity::exactly(1);
    /// `log2`
    Log2 => "log2", Math, Arity::exactly(1);
    /// `sin`
    Sin => "sin", Math, Arity::exactly(1);
    /// `cos`
    Cos => "cos", Math, Arity::exactly(1);
    /// `tan`
    Tan => "tan", Math, Arity::exactly(1);
    /// `asin`
    Asin => "asin", Math, Arity::exactly(1);
    /// `acos`
    Acos => "acos", Math, Arity::exactly(1);
    /// `atan`
    Atan => "atan", Math, Arity::exactly(1);
    /// `min`
    Min => "min", Math, Arity::at_least(1);
    /// `max`
    Max => "max", Math, Arity::at_least(1);

    // String
    /// `upcase`
    Upcase => "upcase", String, Arity::exactly(1);
    /// `downcase`
    Downcase => "downcase", String, Arity::exactly(1);
    /// `concat`
    Concat => "concat", String, Arity::at_least(1);

    // Types
    /// `literal`: raw array or object value, never interpreted.
    Literal => "literal", Types, Arity::exactly(1);
    /// `array`: optional item type, optional length, then the value.
    Array => "array", Types, Arity::between(1, 3);
    /// `typeof`
    TypeOf => "typeof", Types, Arity::exactly(1);
    /// `string`: string assertion over one or more candidates.
    String => "string", Types, Arity::at_least(1);
    /// `number`: number assertion over one or more candidates.
    Number => "number", Types, Arity::at_least(1);
    /// `boolean`: boolean assertion over one or more candidates.
    Boolean => "boolean", Types, Arity::at_least(1);
    /// `object`: object assertion.
    Object => "object", Types, Arity::at_least(1);
    /// `to-string`
    ToString => "to-string", Types, Arity::exactly(1);
    /// `to-number`: first successful conversion among the candidates.
    ToNumber => "to-number", Types, Arity::at_least(1);
    /// `to-boolean`
    ToBoolean => "to-boolean", Types, Arity::exactly(1);
    /// `to-color`: first successful conversion among the candidates.
    ToColor => "to-color", Types, Arity::at_least(1);

    // Variable binding
    /// `let`: name/value pairs then the body.
    Let => "let", VariableBinding, Arity::at_least(1);
    /// `var`: reference to a `let` binding.
    Var => "var", VariableBinding, Arity::exactly(1);

    // Zoom
    /// `zoom`: the current zoom level.
    Zoom => "zoom", Zoom, Arity::exactly(0);

    // Ramps, scales, curves
    /// `step`: input followed by ascending stops.
    Step => "step", Ramps, Arity::at_least(2);
    /// `interpolate`: interpolation type, input and ascending stops.
    Interpolate => "interpolate", Ramps, Arity::at_least(3);
    /// `linear` interpolation type.
    Linear => "linear", Ramps, Arity::exactly(0);
    /// `exponential` interpolation type with its base.
    Exponential => "exponential", Ramps, Arity::exactly(1);
    /// `cubic-bezier` interpolation type with two control points.
    CubicBezier => "cubic-bezier", Ramps, Arity::exactly(4);
}

impl Operator {
    /// Like [`Operator::lookup`], failing with [`StyleError::UnknownOperator`].
    pub fn parse(name: &str) -> StyleResult<Self> {
        Self::lookup(name).ok_or_else(|| StyleError::unknown_operator(name))
    }
}

impl FromStr for Operator {
    type Err = StyleError;

    fn from_str(s: &str) -> StyleResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/operator.rs"]
mod tests;
