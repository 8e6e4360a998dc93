mod card;

pub use card::{
    card_class, Card, CardProps, CARD_BACKGROUND, CARD_OVERFLOW, CARD_PADDING, CARD_ROUNDED,
    CARD_SHADOW,
};
