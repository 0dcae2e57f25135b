//! API parity tests — validates that backend response shapes match what
//! the storefront frontend expects.
//!
//! Shape tests mirror the JSON each handler produces; the analytics test
//! serializes a real aggregate to catch accidental field renames.

use styleloop_insights::{summarize, ReturnIntentRecord};

/// Verify the analyze-style response shape:
/// { image_analysis, style_advice, matched_products }
#[test]
fn test_analyze_style_response_shape() {
    let response = serde_json::json!({
        "image_analysis": {
            "category": "clothing",
            "item_description": "High-waisted light-blue denim trousers",
            "visual_attributes": {
                "primary_colors": ["light blue"],
                "texture_guess": "denim",
                "pattern": "plain",
                "cut_style": "wide-leg",
            },
            "inferred_style": {
                "style_tags": ["casual", "streetwear"],
                "justification": "relaxed cut and distressed finish",
            },
            "contextual_use": {
                "seasons": ["spring", "summer"],
                "environment": ["casual"],
                "formality": "casual",
            },
        },
        "style_advice": {
            "title": "Effortless Street Classic",
            "vibe_description": "Laid-back but deliberate.",
            "combination_logic": "The plain trousers anchor the look.",
            "pro_tip": "Roll the cuffs once.",
        },
        "matched_products": [
            {
                "id": 3,
                "name": "White Leather Sneakers",
                "price": "2499.00 TL",
                "image": "static/img/sneakers1.jpeg",
                "style_tags": ["sporty", "casual"],
                "color_tags": ["white"],
            }
        ],
    });

    assert!(response["image_analysis"].is_object());
    assert!(response["image_analysis"]["inferred_style"]["style_tags"].is_array());
    assert!(response["style_advice"]["title"].is_string());
    assert!(response["matched_products"].is_array());

    let product = &response["matched_products"][0];
    assert!(product["id"].is_number());
    assert!(product["name"].is_string());
    assert!(product["price"].is_string());
    assert!(product["style_tags"].is_array());
    assert!(product["color_tags"].is_array());
}

/// Verify the chat reply shape returned verbatim from the model:
/// { detected_intent, reply_text, is_return_prevented }
#[test]
fn test_chat_reply_shape() {
    let reply = serde_json::json!({
        "detected_intent": "SIZE",
        "reply_text": "I'm sorry the fit wasn't right! [STYLE_ANALYST_LINK]",
        "is_return_prevented": true,
    });

    assert!(reply["detected_intent"].is_string());
    assert!(reply["reply_text"].is_string());
    assert!(reply["is_return_prevented"].is_boolean());
}

/// Verify the return-analytics payload from a real aggregation run.
#[test]
fn test_return_analytics_shape() {
    let records = vec![
        ReturnIntentRecord::new("Beige Linen Shirt", "SIZE", "way too tight"),
        ReturnIntentRecord::new("Beige Linen Shirt", "SIZE", "ordered my size, still small"),
        ReturnIntentRecord::new("Beige Linen Shirt", "COLOR_STYLE", "more yellow than beige"),
        ReturnIntentRecord::new("Emerald Satin Dress", "DEFECTIVE", "loose seam at the hem"),
    ];

    let mut analytics = summarize(&records);
    analytics.product_analysis[0].strategic_advice = Some(serde_json::json!({
        "common_theme": "Fit runs small.",
        "actionable_advice": "Suggest sizing up on the product page.",
    }));

    let payload = serde_json::to_value(&analytics).unwrap();

    assert_eq!(payload["total_returns"], 4);
    assert!(payload["product_analysis"].is_array());

    let top = &payload["product_analysis"][0];
    assert_eq!(top["product_name"], "Beige Linen Shirt");
    assert_eq!(top["total_returns"], 3);
    assert!(top["reasons"].is_array());
    assert!(top["reasons"][0]["intent"].is_string());
    assert!(top["reasons"][0]["count"].is_number());
    assert!(top["reasons"][0]["percentage"].is_number());
    assert!(top["strategic_advice"]["common_theme"].is_string());
    assert!(top["strategic_advice"]["actionable_advice"].is_string());

    // Raw messages stay server-side.
    assert!(top.get("messages").is_none());

    // Second product has no advice attached; the field is omitted entirely.
    let second = &payload["product_analysis"][1];
    assert!(second.get("strategic_advice").is_none());
}

/// Verify the style profile shape.
#[test]
fn test_style_profile_shape() {
    let profile = serde_json::json!({
        "style_profile": [
            {"style": "bohemian", "percentage": 60},
            {"style": "classic", "percentage": 40},
        ],
        "dominant_colors": ["earth tones", "cream"],
        "summary": "Comfort-first with classic accents.",
    });

    assert!(profile["style_profile"].is_array());
    assert!(profile["style_profile"][0]["style"].is_string());
    assert!(profile["style_profile"][0]["percentage"].is_number());
    assert!(profile["dominant_colors"].is_array());
    assert!(profile["summary"].is_string());
}

/// Verify the visual combo shape.
#[test]
fn test_visual_combo_shape() {
    let combo = serde_json::json!({
        "image_description": "Against a plain grey studio backdrop, the model wears...",
    });

    assert!(combo["image_description"].is_string());
}

/// Verify the error body every failing endpoint produces.
#[test]
fn test_error_response_shape() {
    let error = serde_json::json!({
        "error": "A server error occurred during analysis. Please try again.",
    });

    assert!(error["error"].is_string());
}
