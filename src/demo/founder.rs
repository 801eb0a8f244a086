//! A founder owns exactly one shop.

use serde::{Deserialize, Serialize};

use super::shop::{shop, Shop, ShopAction};
use crate::collection::{Reference, Update};
use crate::reducer::{reducer, Reducer};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Founder {
    pub name: String,
    pub shop: Shop,
}

crate::actions! {
    #[derive(Serialize, Deserialize)]
    pub enum FounderAction => FounderKind {
        SetName(String),
        Shop(Update<(), ShopAction>),
    }
}

pub fn owned_shop() -> Reference<Founder, FounderAction, Shop, ShopAction> {
    Reference::new(
        crate::variant!(FounderAction::Shop => FounderKind::Shop),
        shop(),
        crate::field!(Founder, shop),
    )
}

pub fn founder() -> Reducer<Founder, FounderAction> {
    reducer(Founder::default())
        .on(
            crate::variant!(FounderAction::SetName => FounderKind::SetName),
            |founder: Founder, name| Founder { name, ..founder },
        )
        .action(owned_shop())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_independent() {
        let founder = founder();
        let state = founder.reduce(None, FounderAction::SetName("Ada".into()));
        let state = founder.apply(
            state,
            owned_shop().update(ShopAction::SetName("Ada's Books".into())),
        );
        assert_eq!(state.name, "Ada");
        assert_eq!(state.shop.name, "Ada's Books");
    }
}
