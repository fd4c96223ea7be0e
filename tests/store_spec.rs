use roster::store::{Directory, SignupError};
use speculate2::speculate;

speculate! {
    before {
        let directory = Directory::seeded();
    }

    describe "list_activities" {
        it "returns the seeded activities in seed order" {
            let activities = directory.list_activities();
            let names: Vec<&str> = activities.keys().map(String::as_str).collect();
            assert_eq!(names, ["Chess Club", "Programming Class", "Gym Class"]);
        }

        it "returns rosters in signup order" {
            let activities = directory.list_activities();
            assert_eq!(
                activities["Chess Club"].participants,
                ["michael@mergington.edu", "daniel@mergington.edu"]
            );
        }

        it "snapshots rather than shares the map" {
            let snapshot = directory.list_activities();
            directory.signup("Chess Club", "new@test.com").expect("signup failed");
            assert_eq!(snapshot["Chess Club"].participants.len(), 2);
        }
    }

    describe "signup" {
        it "appends the email to the end of the roster" {
            directory.signup("Chess Club", "new@test.com").expect("signup failed");

            let activities = directory.list_activities();
            assert_eq!(
                activities["Chess Club"].participants,
                ["michael@mergington.edu", "daniel@mergington.edu", "new@test.com"]
            );
        }

        it "rejects an email already on the roster" {
            let result = directory.signup("Chess Club", "michael@mergington.edu");
            assert_eq!(result, Err(SignupError::AlreadySignedUp));

            let activities = directory.list_activities();
            assert_eq!(activities["Chess Club"].participants.len(), 2);
        }

        it "rejects an unknown activity" {
            let result = directory.signup("Knitting Club", "new@test.com");
            assert_eq!(result, Err(SignupError::ActivityNotFound));
        }

        it "allows the same email on different activities" {
            directory.signup("Chess Club", "new@test.com").expect("signup failed");
            directory.signup("Gym Class", "new@test.com").expect("signup failed");

            let activities = directory.list_activities();
            assert!(activities["Chess Club"].participants.contains(&"new@test.com".to_string()));
            assert!(activities["Gym Class"].participants.contains(&"new@test.com".to_string()));
        }

        it "does not enforce max_participants" {
            // Chess Club caps at 12 and seeds 2; the cap is never consulted.
            for i in 0..11 {
                let email = format!("student{}@mergington.edu", i);
                directory.signup("Chess Club", &email).expect("signup failed");
            }

            let activities = directory.list_activities();
            assert_eq!(activities["Chess Club"].participants.len(), 13);
        }
    }

    describe "unregister" {
        it "removes the email and keeps the rest in order" {
            directory.signup("Chess Club", "new@test.com").expect("signup failed");
            directory.unregister("Chess Club", "daniel@mergington.edu").expect("unregister failed");

            let activities = directory.list_activities();
            assert_eq!(
                activities["Chess Club"].participants,
                ["michael@mergington.edu", "new@test.com"]
            );
        }

        it "rejects an email that is not registered" {
            let result = directory.unregister("Chess Club", "not@there.com");
            assert_eq!(result, Err(SignupError::NotRegistered));

            let activities = directory.list_activities();
            assert_eq!(activities["Chess Club"].participants.len(), 2);
        }

        it "rejects an unknown activity" {
            let result = directory.unregister("Knitting Club", "michael@mergington.edu");
            assert_eq!(result, Err(SignupError::ActivityNotFound));
        }

        it "allows signing up again after unregistering" {
            directory.unregister("Chess Club", "michael@mergington.edu").expect("unregister failed");
            directory.signup("Chess Club", "michael@mergington.edu").expect("signup failed");

            let activities = directory.list_activities();
            assert_eq!(
                activities["Chess Club"].participants,
                ["daniel@mergington.edu", "michael@mergington.edu"]
            );
        }
    }
}
