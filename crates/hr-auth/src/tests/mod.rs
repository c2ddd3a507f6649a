mod router;

use crate::{Identity, Role};

pub(crate) fn identity_with_role(role: Role) -> Identity {
    Identity::new("42", "ada@corp.example", "Ada", "token-abc", role).unwrap()
}
