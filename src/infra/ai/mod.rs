pub mod gemini_insight_service;
