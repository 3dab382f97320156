use super::error::SchemaError;
use super::member::*;
use serde_json::Value;

pub const MEMBERS_LIST_KEY: &str = "membersList";

/// The parsed content of the members file
pub type Document = Value;

/// Rewrite the `foto` of every member from its `nim` and return the document with the
/// number of members updated.
///
/// Every member is checked before the first `foto` is written, so on error no member has
/// been touched. Other keys, at the root or in the members, are left as they are and keep
/// their order.
pub fn transform(mut document: Document) -> Result<(Document, usize), SchemaError> {
    let members = document
        .as_object_mut()
        .ok_or(SchemaError::NotAnObject)?
        .get_mut(MEMBERS_LIST_KEY)
        .ok_or(SchemaError::MissingMembersList)?
        .as_array_mut()
        .ok_or(SchemaError::MembersListNotArray)?;

    let pending = members
        .iter_mut()
        .enumerate()
        .map(|(index, value)| {
            let member = Member::from_value(index, value)?;
            let url = photo_url(&member.nim()?);
            Ok((member, url))
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    let n_updated = pending.len();
    for (mut member, url) in pending {
        member.set_photo(url);
    }
    Ok((document, n_updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_photo_follows_the_nim() {
        let input = json!({"membersList": [
            {"nim": "21050001", "foto": "old.jpg", "nama": "Alice"},
            {"nim": "21050002", "foto": "", "nama": "Bob"},
            {"nim": 21050003, "nama": "Carol"}
        ]});
        let (output, n_updated) = transform(input).unwrap();

        assert_eq!(n_updated, 3);
        assert_eq!(
            output,
            json!({"membersList": [
                {"nim": "21050001", "foto": "https://siakadu.unesa.ac.id/photo/fotomhs/21050001.jpg", "nama": "Alice"},
                {"nim": "21050002", "foto": "https://siakadu.unesa.ac.id/photo/fotomhs/21050002.jpg", "nama": "Bob"},
                {"nim": 21050003, "nama": "Carol", "foto": "https://siakadu.unesa.ac.id/photo/fotomhs/21050003.jpg"}
            ]})
        );
    }

    #[test]
    fn other_fields_and_keys_are_kept() {
        let input = json!({
            "title": "Anggota",
            "membersList": [{
                "nama": "Dewi",
                "nim": "21050004",
                "divisi": {"nama": "Riset", "tahun": [2021, 2022]},
                "foto": "x",
                "aktif": true
            }],
            "total": 1
        });
        let (output, _) = transform(input.clone()).unwrap();

        assert_eq!(output["title"], input["title"]);
        assert_eq!(output["total"], input["total"]);
        let before = input["membersList"][0].as_object().unwrap();
        let after = output["membersList"][0].as_object().unwrap();
        assert_eq!(
            before.keys().collect::<Vec<_>>(),
            after.keys().collect::<Vec<_>>()
        );
        for (key, value) in before.iter().filter(|(key, _)| *key != PHOTO_KEY) {
            assert_eq!(&after[key], value);
        }
    }

    #[test]
    fn transform_is_idempotent() {
        let input = json!({"membersList": [{"nim": "1", "foto": "a"}, {"nim": "2"}]});
        let (once, _) = transform(input).unwrap();
        let (twice, _) = transform(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_list_updates_nothing() {
        let (output, n_updated) = transform(json!({"membersList": []})).unwrap();
        assert_eq!(n_updated, 0);
        assert_eq!(output, json!({"membersList": []}));
    }

    #[test]
    fn missing_members_list_is_a_schema_error() {
        assert_eq!(
            transform(json!({"members": []})),
            Err(SchemaError::MissingMembersList)
        );
        assert_eq!(
            transform(json!({"membersList": {}})),
            Err(SchemaError::MembersListNotArray)
        );
        assert_eq!(
            transform(json!([])),
            Err(SchemaError::NotAnObject)
        );
    }

    #[test]
    fn one_bad_member_fails_the_whole_list() {
        let input = json!({"membersList": [
            {"nim": "1", "foto": "a"},
            {"nama": "no nim", "foto": "b"}
        ]});
        assert_eq!(
            transform(input),
            Err(SchemaError::MissingNim { index: 1 })
        );
    }
}
