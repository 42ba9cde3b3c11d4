//! Signature type shapes
//!
//! The classifier only cares about the *shape* of a signature type: whether
//! it is (or contains) a raw-pointer-like type. Everything else collapses
//! into `Named`.

use serde::{Deserialize, Serialize};

/// Shape of a type as it appears in a signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeShape {
    /// An ordinary named type; `args` covers generic instantiations
    Named {
        name: String,
        args: Vec<TypeShape>,
    },
    /// Raw pointer to the pointee type (`*T`)
    RawPointer(Box<TypeShape>),
    /// Function pointer with parameter and return shapes
    FunctionPointer {
        params: Vec<TypeShape>,
        ret: Box<TypeShape>,
    },
    /// Fixed-size inline buffer (`T[N]` embedded in a container)
    FixedBuffer {
        element: Box<TypeShape>,
        length: u32,
    },
    /// Reference/slice wrapper; restricted only if the referent is
    Reference(Box<TypeShape>),
    /// Unit/void return
    Unit,
}

impl TypeShape {
    /// Convenience constructor for a plain named type
    pub fn named(name: impl Into<String>) -> Self {
        TypeShape::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Whether this shape is restricted: raw-pointer-like, function-pointer-like,
    /// or a fixed-size inline buffer, at any nesting depth
    pub fn is_restricted(&self) -> bool {
        match self {
            TypeShape::RawPointer(_) | TypeShape::FunctionPointer { .. } | TypeShape::FixedBuffer { .. } => true,
            TypeShape::Named { args, .. } => args.iter().any(TypeShape::is_restricted),
            TypeShape::Reference(inner) => inner.is_restricted(),
            TypeShape::Unit => false,
        }
    }
}

/// A symbol's signature, reduced to what classification needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub params: Vec<TypeShape>,
    pub ret: Option<TypeShape>,
}

impl Signature {
    pub fn new(params: Vec<TypeShape>, ret: Option<TypeShape>) -> Self {
        Self { params, ret }
    }

    /// Signature with no parameters and no interesting return type
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any parameter or the return type denotes a restricted type
    pub fn has_restricted_types(&self) -> bool {
        self.params.iter().any(TypeShape::is_restricted)
            || self.ret.as_ref().is_some_and(TypeShape::is_restricted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_type_is_not_restricted() {
        assert!(!TypeShape::named("Int").is_restricted());
        assert!(!TypeShape::Unit.is_restricted());
    }

    #[test]
    fn pointer_shapes_are_restricted() {
        assert!(TypeShape::RawPointer(Box::new(TypeShape::named("Byte"))).is_restricted());
        assert!(TypeShape::FunctionPointer {
            params: vec![],
            ret: Box::new(TypeShape::Unit),
        }
        .is_restricted());
        assert!(TypeShape::FixedBuffer {
            element: Box::new(TypeShape::named("Byte")),
            length: 16,
        }
        .is_restricted());
    }

    #[test]
    fn restriction_is_found_at_depth() {
        let nested = TypeShape::Named {
            name: "List".to_string(),
            args: vec![TypeShape::RawPointer(Box::new(TypeShape::named("Int")))],
        };
        assert!(nested.is_restricted());

        let through_ref = TypeShape::Reference(Box::new(nested));
        assert!(through_ref.is_restricted());
    }

    #[test]
    fn signature_checks_params_and_return() {
        let safe = Signature::new(vec![TypeShape::named("Int")], Some(TypeShape::named("Bool")));
        assert!(!safe.has_restricted_types());

        let by_param = Signature::new(
            vec![TypeShape::RawPointer(Box::new(TypeShape::named("Int")))],
            None,
        );
        assert!(by_param.has_restricted_types());

        let by_return = Signature::new(
            vec![],
            Some(TypeShape::RawPointer(Box::new(TypeShape::Unit))),
        );
        assert!(by_return.has_restricted_types());
    }
}
