use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use serde_json::{Number, Value};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5d1e_97c3_a4f0_2b68;

const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_UINT: u8 = 2;
const TAG_INT: u8 = 3;
const TAG_FLOAT: u8 = 4;
const TAG_STRING: u8 = 5;
const TAG_ARRAY: u8 = 6;
const TAG_OBJECT: u8 = 7;

/// Stable 128-bit content hash of an expression tree.
///
/// Computed over the wire form, so two trees with equal serialized output hash equally
/// regardless of how they were built or shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExprFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl Expression {
    /// Stable content fingerprint, e.g. as a cache key for compiled expressions.
    pub fn fingerprint(&self) -> ExprFingerprint {
        let mut h = StableHasher::new();
        write_expression(&mut h, self);
        h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_len(&mut self, len: usize) {
        self.write_u64(len as u64);
    }

    fn write_str(&mut self, s: &str) {
        self.write_u8(TAG_STRING);
        self.write_len(s.len());
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> ExprFingerprint {
        let v = self.inner.digest128();
        ExprFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

// Expressions hash as the array they serialize to.
fn write_expression(h: &mut StableHasher, e: &Expression) {
    let operands = e.operands();
    h.write_u8(TAG_ARRAY);
    h.write_len(operands.len() + 1);
    h.write_str(e.operator());
    for op in operands {
        write_operand(h, op);
    }
}

fn write_operand(h: &mut StableHasher, op: &Operand) {
    match op {
        Operand::Null => h.write_u8(TAG_NULL),
        Operand::Bool(b) => {
            h.write_u8(TAG_BOOL);
            h.write_u8(u8::from(*b));
        }
        Operand::Number(n) => write_number(h, n),
        Operand::String(s) => h.write_str(s),
        Operand::Color(c) => h.write_str(&c.to_rgba_string()),
        Operand::Object(map) => {
            h.write_u8(TAG_OBJECT);
            h.write_len(map.len());
            for (k, v) in map {
                h.write_str(k);
                write_value(h, v);
            }
        }
        Operand::Array(items) => write_array(h, items),
        Operand::Expression(e) => write_expression(h, e),
    }
}

fn write_number(h: &mut StableHasher, n: &Number) {
    if let Some(u) = n.as_u64() {
        h.write_u8(TAG_UINT);
        h.write_u64(u);
    } else if let Some(i) = n.as_i64() {
        h.write_u8(TAG_INT);
        h.write_u64(i as u64);
    } else {
        h.write_u8(TAG_FLOAT);
        h.write_u64(n.as_f64().unwrap_or_default().to_bits());
    }
}

fn write_array(h: &mut StableHasher, items: &[Value]) {
    h.write_u8(TAG_ARRAY);
    h.write_len(items.len());
    for v in items {
        write_value(h, v);
    }
}

fn write_value(h: &mut StableHasher, v: &Value) {
    match v {
        Value::Null => h.write_u8(TAG_NULL),
        Value::Bool(b) => {
            h.write_u8(TAG_BOOL);
            h.write_u8(u8::from(*b));
        }
        Value::Number(n) => write_number(h, n),
        Value::String(s) => h.write_str(s),
        Value::Array(items) => write_array(h, items),
        Value::Object(map) => {
            h.write_u8(TAG_OBJECT);
            h.write_len(map.len());
            for (k, v) in map {
                h.write_str(k);
                write_value(h, v);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/fingerprint.rs"]
mod tests;
