use forge1155::TokenId;

/// Forged tokens and the starter tokens burnt, one unit each, to make one of them.
pub const RECIPES: [(TokenId, &[TokenId]); 4] = [
    (3, &[0, 1]),
    (4, &[1, 2]),
    (5, &[0, 2]),
    (6, &[0, 1, 2]),
];

pub fn ingredients(token_id: TokenId) -> Option<&'static [TokenId]> {
    RECIPES
        .iter()
        .find(|(forged, _)| *forged == token_id)
        .map(|(_, ingredients)| *ingredients)
}

pub fn is_forged_token(token_id: TokenId) -> bool {
    ingredients(token_id).is_some()
}
