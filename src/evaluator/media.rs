//! Images, video and enhanced content rules.

use crate::rubric::Rubric;

use super::report::{Category, CategoryResult, CheckResult};

pub fn evaluate_media(
    image_count: usize,
    video_count: u32,
    has_enhanced_content: bool,
    rubric: &Rubric,
) -> CategoryResult {
    let checks = vec![
        CheckResult::new(
            format!("Has at least {} images", rubric.media_min_images),
            image_count >= rubric.media_min_images,
            || {
                format!(
                    "Currently has {image_count} images. Add more to meet the minimum requirement."
                )
            },
        ),
        CheckResult::new(
            "Has enhanced content (A+ Content)",
            has_enhanced_content,
            || "Add enhanced content (A+ Content) to improve product presentation".to_string(),
        ),
        CheckResult::new(
            format!("Has at least {} video", rubric.media_min_videos),
            video_count >= rubric.media_min_videos,
            || {
                format!(
                    "Amazon recommends at least {} video. Currently has {}.",
                    rubric.media_min_videos,
                    if video_count == 0 {
                        "none".to_string()
                    } else {
                        video_count.to_string()
                    }
                )
            },
        ),
    ];

    CategoryResult::from_checks(Category::Media, checks, rubric.media_pass_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_and_enhanced_content_pass_without_video() {
        let result = evaluate_media(7, 0, true, &Rubric::default());

        assert_eq!(result.score, 2);
        assert_eq!(result.max_score, 3);
        assert!(result.passed);
        assert_eq!(
            result.checks[2].recommendation.as_deref(),
            Some("Amazon recommends at least 1 video. Currently has none.")
        );
    }

    #[test]
    fn test_image_threshold() {
        let rubric = Rubric::default();
        assert!(evaluate_media(6, 0, false, &rubric).checks[0].passed);

        let result = evaluate_media(5, 0, false, &rubric);
        assert!(!result.checks[0].passed);
        assert_eq!(
            result.checks[0].recommendation.as_deref(),
            Some("Currently has 5 images. Add more to meet the minimum requirement.")
        );
        assert!(!result.passed);
    }

    #[test]
    fn test_everything_present() {
        let result = evaluate_media(6, 1, true, &Rubric::default());
        assert_eq!(result.score, 3);
    }
}
