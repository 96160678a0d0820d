//! Category display helpers

use crate::models::Category;

/// Icon shown next to a category in lists and cards
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Groceries => "🛒",
        Category::Dining => "🍔",
        Category::Transportation => "🚗",
        Category::Housing => "🏠",
        Category::Utilities => "💡",
        Category::Entertainment => "🎬",
        Category::Shopping => "🛍️",
        Category::Travel => "✈️",
        Category::Healthcare => "⚕️",
        Category::Personal => "👤",
        Category::Income => "💰",
        Category::Education => "🎓",
        Category::Fitness => "💪",
        Category::Subscriptions => "📱",
        Category::Other => "📝",
    }
}

/// Icon plus display name, e.g. "🍔 Dining"
pub fn category_label(category: Category) -> String {
    format!("{} {}", category_icon(category), category)
}
