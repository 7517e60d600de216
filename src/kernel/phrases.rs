//! Canned answer texts. Every pool holds interchangeable phrasings; the
//! decider draws uniformly from one.

use super::intent::types::{Dimension, Intent};
use rand::Rng;

pub const ASK_GET_REFUSALS: &[&str] = &[
    "I apologize, but I'm not programmed to provide information about the clothes yet.",
    "Unfortunately, I'm unable to assist with questions specifically about the clothes on display.",
    "I'm sorry, but I don't have the capability to answer questions about the clothes in the display.",
    "Regrettably, I'm unable to provide information about the clothes in display.",
    "Unfortunately, I don't have access to information about the clothes showcased.",
    "I regret to inform you that I'm not programmed to answer specific questions about the clothes on display.",
];

pub const DISAMBIGUATE_REFUSALS: &[&str] = &[
    "I apologize for the inconvenience, but I cannot identify or provide information about specific clothes at this time.",
    "Unfortunately, I am unable to assist with questions specifically related to the clothes on display as I lack the necessary knowledge.",
    "I'm sorry, but I don't have the capability to answer questions about the clothes in the display since I cannot identify them.",
    "Regrettably, I am unable to provide information about the clothes in display as I don't have the means to identify them.",
    "Unfortunately, I don't have access to information about the clothes showcased, making it impossible for me to provide details about them.",
    "I regret to inform you that I'm not programmed to answer specific questions about the clothes on display since I cannot identify them.",
];

pub const COMPARE_REFUSALS: &[&str] = &[
    "I apologize for any confusion, but I'm unable to compare the items on display as I don't have the capability to track them individually.",
    "I'm sorry, but I can't provide a comparison of the items on display because I don't have the ability to track them.",
    "Unfortunately, I don't have the capability to compare the items on display as I can't track them individually.",
    "Regrettably, I'm unable to perform comparisons of the items on display since I can't track them individually.",
    "I'm sorry, but I don't have access to the necessary information to compare the items on display as I can't track them individually.",
    "I regret to inform you that I'm unable to compare the items on display because I don't have the ability to track them individually.",
];

/// Follow-up to a refusal when the user has only just spoken.
pub const CAN_ASSIST: &str = "I can assist you in filtering the catalog based on your preferences. \
Please provide me with the specific fabric, pattern, size, color, or type you are looking for, \
and I will help narrow down the options to match your requirements.";

/// Follow-up to a refusal that pivots to recommending.
pub const INSTEAD: &[&str] = &["Instead...", "Alternatively...", "As an alternative"];

/// Justification that immediately follows a `recommend` action.
pub const RECOMMEND: &[&str] = &["Perhaps you'd like these?", "What do you think about these?"];

/// Clarifying questions; `{}` is replaced by the dimension name.
pub const CLARIFY_TEMPLATES: &[&str] = &[
    "What is your preference about {}?",
    "Do you have any preference about {}?",
    "What {} do you like?",
];

/// Refusal pool for an intent, empty for intents that are never refused.
pub fn refusals(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::AskGet => ASK_GET_REFUSALS,
        Intent::InformDisambiguate => DISAMBIGUATE_REFUSALS,
        Intent::RequestCompare => COMPARE_REFUSALS,
        Intent::InformGet
        | Intent::InformRefine
        | Intent::RequestAddToCart
        | Intent::RequestGet => &[],
    }
}

/// Uniform draw from a pool. An empty pool yields `None`.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> Option<&'static str> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}

pub fn clarifying_question<R: Rng + ?Sized>(rng: &mut R, dimension: Dimension) -> String {
    let template = pick(rng, CLARIFY_TEMPLATES).unwrap_or(CLARIFY_TEMPLATES[0]);
    template.replacen("{}", dimension.as_str(), 1)
}
