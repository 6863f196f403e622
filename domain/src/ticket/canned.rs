//! Canned answers for offline (local) submission

use super::category::Category;

pub const GUIDE_ANSWER: &str = "Please check the user guide section for step-by-step instructions.";
pub const POLICIES_ANSWER: &str =
    "Our policies are available in the security and privacy documentation.";
pub const FAQ_ANSWER: &str = "This question is answered in the FAQ section.";
pub const GENERIC_ACKNOWLEDGEMENT: &str = "Thank you, we will get back to you.";

/// Map a category to its fixed guidance string. Pure.
pub fn canned_answer(category: Category) -> &'static str {
    match category {
        Category::Guide => GUIDE_ANSWER,
        Category::Policies => POLICIES_ANSWER,
        Category::Faq => FAQ_ANSWER,
        Category::Unset => GENERIC_ACKNOWLEDGEMENT,
    }
}
