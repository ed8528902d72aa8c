use crate::expression::node::Expression;
use crate::expression::operator::Operator;

/// `["properties"]`: the feature properties object.
pub fn properties() -> Expression {
    Expression::from(Operator::Properties)
}

/// `["geometry-type"]`
pub fn geometry_type() -> Expression {
    Expression::from(Operator::GeometryType)
}

/// `["id"]`
pub fn id() -> Expression {
    Expression::from(Operator::Id)
}

// Heatmap

/// `["heatmap-density"]`: only meaningful in a heatmap color property.
pub fn heatmap_density() -> Expression {
    Expression::from(Operator::HeatmapDensity)
}

// Zoom

/// `["zoom"]`: the current zoom level.
pub fn zoom() -> Expression {
    Expression::from(Operator::Zoom)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/feature.rs"]
mod tests;
