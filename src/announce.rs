//! Bounded-length commit announcements

use crate::event::PushCommit;

/// Maximum status length the platform accepts, in Unicode code points.
pub const MAX_POST_LENGTH: usize = 280;

/// Code points taken by the literal chrome in the announcement format:
/// `" by "`, `": "` and the two newlines.
const CHROME_LENGTH: usize = 8;

/// Builds the announcement for a head commit:
/// `"{id} by {author}: {message}\n{url}\n"`.
///
/// Only the free-text message shrinks. Whatever remains of the 280
/// code-point budget after the id, author name, url and chrome goes to the
/// message; a longer message is cut at that count and marked with a single
/// U+2026. All lengths are counted in code points, never bytes.
pub fn compose_announcement(commit: &PushCommit) -> String {
    let fixed = commit.id.chars().count()
        + commit.author.name.chars().count()
        + commit.url.chars().count()
        + CHROME_LENGTH;
    let budget = MAX_POST_LENGTH as isize - fixed as isize;
    let message = clip_message(&commit.message, budget);

    format!(
        "{} by {}: {}\n{}\n",
        commit.id, commit.author.name, message, commit.url
    )
}

/// Cuts `message` down to `budget` code points, appending U+2026 when
/// anything was dropped. A negative budget (the fixed portion alone is over
/// the limit) keeps zero message code points instead of underflowing.
fn clip_message(message: &str, budget: isize) -> String {
    if (message.chars().count() as isize) <= budget {
        return message.to_string();
    }
    let keep = usize::try_from(budget).unwrap_or(0);
    let mut clipped: String = message.chars().take(keep).collect();
    clipped.push('\u{2026}');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::GitAuthor;
    use pretty_assertions::assert_eq;

    fn commit(id: &str, name: &str, url: &str, message: &str) -> PushCommit {
        PushCommit {
            id: id.to_string(),
            url: url.to_string(),
            message: message.to_string(),
            author: GitAuthor {
                name: name.to_string(),
                email: String::new(),
            },
            committer: GitAuthor::default(),
        }
    }

    #[test]
    fn short_message_passes_through_unchanged() {
        let announcement = compose_announcement(&commit(
            "deadbeef",
            "Al",
            "https://x/deadbeef",
            "fix bug",
        ));
        assert_eq!(announcement, "deadbeef by Al: fix bug\nhttps://x/deadbeef\n");
    }

    #[test]
    fn message_at_the_exact_budget_is_not_clipped() {
        // 280 - 6 - 4 - 28 - 8 leaves 234 code points for the message.
        let message = "m".repeat(234);
        let announcement = compose_announcement(&commit(
            "abc123",
            "Jane",
            "https://example.com/c/abc123",
            &message,
        ));
        assert!(announcement.contains(&message));
        assert!(!announcement.contains('\u{2026}'));
        assert_eq!(announcement.chars().count(), MAX_POST_LENGTH);
    }

    #[test]
    fn message_one_over_the_budget_is_clipped_with_an_ellipsis() {
        let message = "m".repeat(235);
        let announcement = compose_announcement(&commit(
            "abc123",
            "Jane",
            "https://example.com/c/abc123",
            &message,
        ));
        let expected = format!(
            "abc123 by Jane: {}\u{2026}\nhttps://example.com/c/abc123\n",
            "m".repeat(234)
        );
        assert_eq!(announcement, expected);
    }

    #[test]
    fn clipping_counts_code_points_not_bytes() {
        // Each crab is one code point but four bytes; a byte-based cut would
        // split one in half.
        let message = "\u{1f980}".repeat(300);
        let announcement = compose_announcement(&commit(
            "abc123",
            "Jane",
            "https://example.com/c/abc123",
            &message,
        ));
        let expected_message = format!("{}\u{2026}", "\u{1f980}".repeat(234));
        assert!(announcement.contains(&expected_message));
        assert!(String::from_utf8(announcement.into_bytes()).is_ok());
    }

    #[test]
    fn oversized_fixed_portion_drops_the_message_entirely() {
        let url = format!("https://example.com/{}", "p".repeat(300));
        let announcement = compose_announcement(&commit("abc123", "Jane", &url, "hello"));
        assert_eq!(
            announcement,
            format!("abc123 by Jane: \u{2026}\n{url}\n")
        );
    }

    #[test]
    fn empty_fields_are_accepted() {
        let announcement = compose_announcement(&PushCommit::default());
        assert_eq!(announcement, " by : \n\n");
    }
}
