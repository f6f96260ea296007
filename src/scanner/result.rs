use std::fmt;

/// Outcome of analyzing one member.
///
/// A member either cannot be shown to throw (the `does_not_throw` sentinel)
/// or throws unconditionally at some call-graph depth. Depth 0 means the
/// member's own body throws; depth `n` means the throw sits `n` calls away.
/// Lower depths are stronger findings, so [`ExceptionInfo::combine`] keeps
/// the shallower of two results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionInfo {
    level: i32,
    site: Option<String>,
}

impl ExceptionInfo {
    /// The result for a member with no detectable throw.
    #[must_use]
    pub fn does_not_throw() -> Self {
        ExceptionInfo {
            level: -1,
            site: None,
        }
    }

    /// A positive finding at the given depth, witnessed by the method whose
    /// body contained the throw.
    #[must_use]
    pub fn throws_at(level: i32, site: impl Into<String>) -> Self {
        ExceptionInfo {
            level,
            site: Some(site.into()),
        }
    }

    /// Whether the member was found to throw.
    #[must_use]
    pub fn throws(&self) -> bool {
        self.level >= 0
    }

    /// Call-graph depth of the finding (`-1` when the member does not
    /// throw).
    #[must_use]
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Stable identifier of the method whose body contained the throw, when
    /// the member throws.
    #[must_use]
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Keeps the stronger (shallower) of two results. A non-throwing side
    /// yields to the other; on equal depth the receiver wins, so the first
    /// accessor or callee examined supplies the witness.
    #[must_use]
    pub fn combine(self, other: ExceptionInfo) -> ExceptionInfo {
        if !self.throws() {
            return other;
        }
        if !other.throws() {
            return self;
        }
        if other.level < self.level {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for ExceptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)
    }
}
