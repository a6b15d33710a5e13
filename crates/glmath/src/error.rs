use thiserror::Error;

/// Errors reported by the dynamically-dispatched parts of the API.
///
/// Operations between statically-typed vectors, matrices and quaternions check their shapes at
/// compile time and never return these. They arise from [`Arg`][crate::Arg]-based construction,
/// [`AnyMatrix`][crate::AnyMatrix] arithmetic, checked (possibly negative) indexing, and checked
/// matrix inversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No constructor overload matches the given argument list.
    #[error("no {target} constructor accepts ({args})")]
    Construction { target: String, args: String },

    /// An operator was applied to a combination of operands it has no rule for.
    #[error("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'")]
    UnsupportedOperands {
        op: &'static str,
        lhs: String,
        rhs: String,
    },

    /// A non-numeric argument was passed where only numbers are accepted.
    #[error("unsupported type {found} for {target}")]
    UnsupportedType { target: String, found: String },

    /// A column or component index is outside of `-len..len`.
    #[error("{target} index {index} out of range for length {len}")]
    IndexOutOfRange {
        target: String,
        index: isize,
        len: usize,
    },

    /// Attempted to invert a matrix with a zero determinant.
    #[error("attempt to invert a singular {target}")]
    Singular { target: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Maps a possibly negative index into `0..len`.
///
/// Negative indices count from the end, so `-1` is the last element.
pub(crate) fn resolve_index(
    target: impl FnOnce() -> String,
    index: isize,
    len: usize,
) -> Result<usize> {
    let resolved = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if resolved < 0 || resolved >= len as isize {
        return Err(Error::IndexOutOfRange {
            target: target(),
            index,
            len,
        });
    }
    Ok(resolved as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices() {
        let name = || "mat4".to_string();
        assert_eq!(resolve_index(name, 0, 4), Ok(0));
        assert_eq!(resolve_index(name, 3, 4), Ok(3));
        assert_eq!(resolve_index(name, -1, 4), Ok(3));
        assert_eq!(resolve_index(name, -4, 4), Ok(0));
        assert_eq!(
            resolve_index(name, 4, 4),
            Err(Error::IndexOutOfRange {
                target: "mat4".into(),
                index: 4,
                len: 4
            })
        );
        assert!(resolve_index(name, -5, 4).is_err());
    }

    #[test]
    fn messages() {
        let err = Error::UnsupportedOperands {
            op: "*",
            lhs: "mat3x2".into(),
            rhs: "mat4".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported operand type(s) for *: 'mat3x2' and 'mat4'"
        );
    }
}
