//! Registered aliases.

use std::any::Any;

use crate::codec::short_type_name;
use crate::error::RouteError;
use crate::path::{Alias, Path};

type ApplyFn = dyn Fn(Box<dyn Any>) -> Result<Path, RouteError> + Send + Sync;

/// An alias identifier bound to its context-to-path function.
///
/// The context arrives as `Box<dyn Any>` and is downcast to the declared
/// context type before the function runs.
pub(crate) struct RegisteredAlias {
    identifier: String,
    description: String,
    apply: Box<ApplyFn>,
}

impl RegisteredAlias {
    pub(crate) fn new<C, F>(alias: &Alias<C>, apply: F) -> Self
    where
        C: 'static,
        F: Fn(C) -> Option<Path> + Send + Sync + 'static,
    {
        let identifier = alias.identifier().to_string();
        let context_type = short_type_name(std::any::type_name::<C>());
        let description = format!("Alias<{}>('{}')", context_type, identifier);

        let owner = identifier.clone();
        let wrapped = move |context: Box<dyn Any>| -> Result<Path, RouteError> {
            let context = context
                .downcast::<C>()
                .map_err(|_| RouteError::AliasContextMismatch {
                    identifier: owner.clone(),
                    expected: context_type,
                })?;
            apply(*context).ok_or_else(|| RouteError::AliasContextRejected {
                identifier: owner.clone(),
            })
        };

        Self {
            identifier,
            description,
            apply: Box::new(wrapped),
        }
    }

    pub(crate) fn identifier(&self) -> &str {
        &self.identifier
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    /// Map `context` to a path.
    pub(crate) fn apply(&self, context: Box<dyn Any>) -> Result<Path, RouteError> {
        (self.apply)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_alias() -> RegisteredAlias {
        let alias: Alias<u64> = Alias::new("product");
        RegisteredAlias::new(&alias, |id: u64| {
            (id > 0).then(|| Path::new(format!("product/details/{}", id)))
        })
    }

    #[test]
    fn test_apply() {
        let entry = product_alias();
        assert_eq!(entry.apply(Box::new(7u64)), Ok(Path::new("product/details/7")));
        assert_eq!(
            entry.apply(Box::new(0u64)),
            Err(RouteError::AliasContextRejected {
                identifier: "product".into()
            })
        );
    }

    #[test]
    fn test_context_type_checked() {
        let entry = product_alias();
        assert_eq!(
            entry.apply(Box::new("7")),
            Err(RouteError::AliasContextMismatch {
                identifier: "product".into(),
                expected: "u64",
            })
        );
    }

    #[test]
    fn test_description() {
        assert_eq!(product_alias().description(), "Alias<u64>('product')");

        let home: Alias<()> = Alias::new("home");
        let entry = RegisteredAlias::new(&home, |()| Some(Path::new("home")));
        assert_eq!(entry.description(), "Alias<()>('home')");
    }
}
