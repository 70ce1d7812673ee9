mod macros;

/// Returns the version of this workspace.
pub const fn helvion_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` with a mutable reference to `self`.
    fn with<X>(mut self, f: impl FnOnce(&mut Self) -> X) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }

    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use helvion_utils::Apply;
    /// fn subject(name: Option<&str>) -> String {
    ///     String::from("Contact").apply_map(name, |slf, name| format!("{slf} from {name}"))
    /// }
    /// assert_eq!(subject(None), "Contact");
    /// assert_eq!(subject(Some("Ana")), "Contact from Ana");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
