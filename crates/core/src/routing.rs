//! Maps `(route, role)` to the view that should be rendered.
//!
//! Resolution order: no user means `Login`; then the rule table below is
//! scanned top to bottom and the first matching rule wins; then guarded
//! prefixes turn foreign-role areas into `Forbidden`; everything else is
//! `NotFound`.

use crate::model::{QuizId, UserRole};
use crate::route::{DASHBOARD_PATH, ROOT_PATH, RoutePath};

/// What the main outlet renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    QuizCreator,
    QuizTaker { quiz_id: QuizId },
    QuizResult { score: i64, total: i64 },
    Forbidden,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Pattern {
    fn matches(self, route: &RoutePath) -> bool {
        match self {
            Pattern::Exact(path) => route.as_str() == path,
            Pattern::Prefix(prefix) => route.starts_with(prefix),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Dashboard,
    QuizCreator,
    QuizTaker,
    QuizResult,
}

impl Target {
    fn build(self, route: &RoutePath) -> View {
        match self {
            Target::Dashboard => View::Dashboard,
            Target::QuizCreator => View::QuizCreator,
            Target::QuizTaker => View::QuizTaker {
                quiz_id: QuizId::new(route.segment(3)),
            },
            Target::QuizResult => View::QuizResult {
                score: parse_int(route.segment(3)),
                total: parse_int(route.segment(4)),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RouteRule {
    pattern: Pattern,
    /// `None` admits every signed-in role.
    role: Option<UserRole>,
    target: Target,
}

impl RouteRule {
    fn admits(&self, route: &RoutePath, role: UserRole) -> bool {
        self.role.is_none_or(|required| required == role) && self.pattern.matches(route)
    }
}

const ROUTE_TABLE: &[RouteRule] = &[
    RouteRule {
        pattern: Pattern::Exact("/teacher/create-quiz"),
        role: Some(UserRole::Teacher),
        target: Target::QuizCreator,
    },
    RouteRule {
        pattern: Pattern::Prefix("/quiz/take/"),
        role: Some(UserRole::Student),
        target: Target::QuizTaker,
    },
    RouteRule {
        pattern: Pattern::Prefix("/quiz/result/"),
        role: Some(UserRole::Student),
        target: Target::QuizResult,
    },
    RouteRule {
        pattern: Pattern::Exact(ROOT_PATH),
        role: None,
        target: Target::Dashboard,
    },
    RouteRule {
        pattern: Pattern::Exact(DASHBOARD_PATH),
        role: None,
        target: Target::Dashboard,
    },
];

/// Areas reserved for one role; other roles get `Forbidden` instead of `NotFound`.
const GUARDED_PREFIXES: &[(&str, UserRole)] = &[
    ("/teacher", UserRole::Teacher),
    ("/admin", UserRole::Admin),
];

/// Resolves the view for `route` as seen by a user with `role`.
///
/// `role` is `None` when nobody is signed in.
#[must_use]
pub fn resolve(route: &RoutePath, role: Option<UserRole>) -> View {
    let Some(role) = role else {
        return View::Login;
    };

    if let Some(rule) = ROUTE_TABLE.iter().find(|rule| rule.admits(route, role)) {
        return rule.target.build(route);
    }

    let forbidden = GUARDED_PREFIXES
        .iter()
        .any(|(prefix, owner)| route.starts_with(prefix) && *owner != role);
    if forbidden {
        View::Forbidden
    } else {
        View::NotFound
    }
}

/// Lenient integer parse: optional sign, then leading digits, saturating at
/// the `i64` bounds. No digits at all becomes 0.
fn parse_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(path: &str, role: UserRole) -> View {
        resolve(&RoutePath::new(path), Some(role))
    }

    #[test]
    fn anonymous_always_gets_login() {
        for path in ["/", "/dashboard", "/teacher/create-quiz", "/quiz/take/x", "/nope"] {
            assert_eq!(resolve(&RoutePath::new(path), None), View::Login, "{path}");
        }
    }

    #[test]
    fn teacher_reaches_quiz_creator() {
        assert_eq!(at("/teacher/create-quiz", UserRole::Teacher), View::QuizCreator);
    }

    #[test]
    fn other_roles_are_forbidden_from_teacher_area() {
        assert_eq!(at("/teacher/create-quiz", UserRole::Student), View::Forbidden);
        assert_eq!(at("/teacher/create-quiz", UserRole::Admin), View::Forbidden);
    }

    #[test]
    fn unknown_teacher_page_is_not_found_for_teacher() {
        assert_eq!(at("/teacher/reports", UserRole::Teacher), View::NotFound);
    }

    #[test]
    fn student_takes_quiz_by_id() {
        assert_eq!(
            at("/quiz/take/abc123", UserRole::Student),
            View::QuizTaker {
                quiz_id: QuizId::new("abc123")
            }
        );
    }

    #[test]
    fn empty_quiz_id_is_passed_through() {
        assert_eq!(
            at("/quiz/take/", UserRole::Student),
            View::QuizTaker {
                quiz_id: QuizId::new("")
            }
        );
    }

    #[test]
    fn quiz_routes_are_student_only() {
        assert_eq!(at("/quiz/take/abc123", UserRole::Teacher), View::NotFound);
        assert_eq!(at("/quiz/result/1/2", UserRole::Admin), View::NotFound);
    }

    #[test]
    fn result_parses_score_and_total() {
        assert_eq!(
            at("/quiz/result/7/10", UserRole::Student),
            View::QuizResult { score: 7, total: 10 }
        );
    }

    #[test]
    fn result_defaults_bad_numbers_to_zero() {
        assert_eq!(
            at("/quiz/result/x/10", UserRole::Student),
            View::QuizResult { score: 0, total: 10 }
        );
        assert_eq!(
            at("/quiz/result/", UserRole::Student),
            View::QuizResult { score: 0, total: 0 }
        );
        assert_eq!(
            at("/quiz/result/5", UserRole::Student),
            View::QuizResult { score: 5, total: 0 }
        );
    }

    #[test]
    fn parse_int_keeps_sign_and_leading_digits() {
        assert_eq!(parse_int("7abc"), 7);
        assert_eq!(parse_int("-3"), -3);
        assert_eq!(parse_int("+5"), 5);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("-"), 0);
        assert_eq!(parse_int("x7"), 0);
        assert_eq!(parse_int("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_int("-99999999999999999999999"), -i64::MAX);
    }

    #[test]
    fn result_keeps_signed_and_large_numbers() {
        assert_eq!(
            at("/quiz/result/-3/10", UserRole::Student),
            View::QuizResult { score: -3, total: 10 }
        );
        assert_eq!(
            at("/quiz/result/+5/10", UserRole::Student),
            View::QuizResult { score: 5, total: 10 }
        );
        assert_eq!(
            at("/quiz/result/5000000000/10", UserRole::Student),
            View::QuizResult {
                score: 5_000_000_000,
                total: 10
            }
        );
    }

    #[test]
    fn root_and_dashboard_are_the_dashboard_for_everyone() {
        for role in UserRole::ALL {
            assert_eq!(at("/", role), View::Dashboard);
            assert_eq!(at("/dashboard", role), View::Dashboard);
        }
    }

    #[test]
    fn admin_area_is_forbidden_to_non_admins() {
        assert_eq!(at("/admin/anything", UserRole::Student), View::Forbidden);
        assert_eq!(at("/admin/anything", UserRole::Teacher), View::Forbidden);
        assert_eq!(at("/admin/anything", UserRole::Admin), View::NotFound);
    }

    #[test]
    fn unmatched_paths_are_not_found() {
        assert_eq!(at("/unknown/path", UserRole::Teacher), View::NotFound);
        assert_eq!(at("/dashboard/", UserRole::Student), View::NotFound);
    }

    #[test]
    fn guard_uses_plain_prefix_match() {
        assert_eq!(at("/teachers", UserRole::Student), View::Forbidden);
    }
}
