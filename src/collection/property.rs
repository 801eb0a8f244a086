//! Plain values that are only ever replaced.

use std::fmt;

use crate::action::{Action, ActionDefinition, Variant};
use crate::cursor::{derive, Cursor, Derivation, Fetched};
use crate::field::Field;
use crate::reducer::{Replace, State};

/// A field of the owner state that is updated by replacing it.
///
/// The owner action carrying the new value is described by `variant`.
/// Cursors over a property accept [`Replace`] actions; see
/// [`Cursor::set`](crate::Cursor::set).
pub struct Property<S, A: Action, P> {
    variant: Variant<A, P>,
    field: Field<S, P>,
}

impl<S, A, P> Property<S, A, P>
where
    S: State,
    A: Action,
    P: State + fmt::Debug,
{
    pub fn new(variant: Variant<A, P>, field: Field<S, P>) -> Self {
        Self { variant, field }
    }

    pub fn field(&self) -> &Field<S, P> {
        &self.field
    }

    /// An owner action replacing the property with `value`.
    pub fn update(&self, value: P) -> A {
        self.variant.create(value)
    }

    /// A clone of the current value.
    pub fn fetch(&self, state: &S) -> Fetched<P> {
        Fetched::present(self.field.get(state).into_owned())
    }

    pub fn derivation(&self) -> Derivation<S, A, (), P, Replace<P>> {
        let property = self.clone();
        let variant = self.variant;
        derive(
            move |state: &S, _: &()| property.fetch(state),
            move |_: &(), Replace(value): Replace<P>| variant.create(value),
        )
    }

    /// A snapshot cursor over the property.
    pub fn cursor(&self, outer: &Cursor<S, A>) -> Cursor<P, Replace<P>> {
        self.derivation().at(outer, ())
    }

    /// A live cursor over the property.
    pub fn live_cursor(&self, outer: &Cursor<S, A>) -> Cursor<P, Replace<P>> {
        self.derivation().live(outer, ())
    }
}

impl<S, A, P> ActionDefinition<S, A> for Property<S, A, P>
where
    S: State,
    A: Action,
    P: State + fmt::Debug,
{
    fn kind(&self) -> A::Kind {
        self.variant.kind()
    }

    fn apply(&self, state: S, action: A) -> S {
        match self.variant.extract(action) {
            Some(value) => self.field.set(state, value),
            None => {
                tracing::warn!(
                    kind = ?self.variant.kind(),
                    field = self.field.name(),
                    "Action routed to a property of another kind, state unchanged"
                );
                state
            }
        }
    }
}

impl<S, A: Action, P> Clone for Property<S, A, P> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            field: self.field.clone(),
        }
    }
}

impl<S, A: Action, P> fmt::Debug for Property<S, A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("kind", &self.variant.kind())
            .field("field", &self.field.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::reducer;
    use crate::store::{live, snapshot, Store};

    crate::actions! {
        enum LabelAction => LabelKind {
            Text(String),
            Size(u8),
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        text: String,
        size: u8,
    }

    fn text() -> Property<Label, LabelAction, String> {
        Property::new(
            crate::variant!(LabelAction::Text => LabelKind::Text),
            crate::field!(Label, text),
        )
    }

    fn label() -> Label {
        Label {
            text: "draft".to_string(),
            size: 10,
        }
    }

    #[test]
    fn update_replaces_only_its_field() {
        let text = text();
        let labels = reducer(label()).action(text.clone());
        let state = labels.reduce(None, text.update("final".to_string()));
        assert_eq!(state.text, "final");
        assert_eq!(state.size, 10);
    }

    #[test]
    fn cursor_set_goes_through_store() {
        let text = text();
        let store = reducer(label()).action(text.clone()).store();

        let cursor = text.cursor(&snapshot(&store));
        assert_eq!(cursor.state().as_str(), "draft");

        let cursor = cursor.set("v2".to_string());
        assert_eq!(cursor.state().as_str(), "v2");
        assert_eq!(store.current_state().text, "v2");
    }

    #[test]
    fn live_cursor_sees_other_writers() {
        let text = text();
        let store = reducer(label()).action(text.clone()).store();
        let watching = text.live_cursor(&live(&store));

        store.dispatch(text.update("elsewhere".to_string()));
        assert_eq!(watching.state().as_str(), "elsewhere");
    }

    #[test]
    fn unregistered_sibling_kind_is_ignored() {
        let labels = reducer(label()).action(text());
        assert_eq!(labels.reduce(None, LabelAction::Size(20)), label());
    }

    #[test]
    fn debug_names_kind_and_field() {
        assert_eq!(
            format!("{:?}", text()),
            "Property { kind: Text, field: \"text\" }"
        );
    }
}
