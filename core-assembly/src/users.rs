//! Sample user generation
//!
//! Users are independent of the catalog records. Names are drawn from fixed
//! tables with a seeded generator, so a given seed always produces the same
//! roster. The email carries the roster index, which keeps addresses unique
//! even when names repeat.

use core_model::{User, UserRole};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_USER_ID: u64 = 2001;
const LIBRARIAN_COUNT: usize = 3;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Mike", "Sarah", "Tom", "Lisa", "David", "Emily", "Chris", "Anna",
];
const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

/// Generate `count` users. The first [`LIBRARIAN_COUNT`] are librarians,
/// the rest members.
pub fn generate_users(count: usize, seed: u64) -> Vec<User> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            User {
                id: FIRST_USER_ID + i as u64,
                name: format!("{} {}", first, last),
                email: format!("{}.{}{}@library.com", first.to_lowercase(), last.to_lowercase(), i),
                role: if i < LIBRARIAN_COUNT {
                    UserRole::Librarian
                } else {
                    UserRole::Member
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_sequential_from_2001() {
        let users = generate_users(5, 7);
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2001, 2002, 2003, 2004, 2005]);
    }

    #[test]
    fn test_first_three_are_librarians() {
        let users = generate_users(10, 7);
        for (i, user) in users.iter().enumerate() {
            let expected = if i < 3 {
                UserRole::Librarian
            } else {
                UserRole::Member
            };
            assert_eq!(user.role, expected);
        }
    }

    #[test]
    fn test_emails_unique_even_with_repeated_names() {
        let users = generate_users(200, 7);
        let emails: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn test_email_is_lowercased_name_plus_index() {
        let users = generate_users(1, 7);
        let user = &users[0];
        let (first, rest) = user.name.split_once(' ').unwrap();
        assert_eq!(
            user.email,
            format!("{}.{}0@library.com", first.to_lowercase(), rest.to_lowercase())
        );
    }

    #[test]
    fn test_same_seed_same_roster() {
        assert_eq!(generate_users(50, 42), generate_users(50, 42));
    }
}
