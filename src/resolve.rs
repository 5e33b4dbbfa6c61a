//! Relational field resolution.
//!
//! Each function here computes one relational field for one base row by
//! scanning the fetched collections. Authorship is a required relation:
//! a photo whose author is missing from the user collection fails the
//! lookup with a dangling-reference error. Tag associations are soft in
//! both directions: a tag pointing at a missing user or photo is dropped
//! from the result, never surfaced as an error or a placeholder.
//!
//! Scans are linear, O(n) per field per row. That is fine at this data
//! scale; if volume grows, build per-request hash indexes from the fetched
//! collections instead, keeping the same ordering and filtering semantics.

use crate::config::Config;
use crate::error::{PhotoShareError, Result};
use crate::select::{PhotoRelation, PhotoSelection, UserRelation, UserSelection};
use crate::view::{PhotoView, UserView};
use photoshare_types::{Photo, Tag, User};

/// The three collections as read by one request's fan-out.
///
/// Reads are not atomic across collections; a dataset is merely the state
/// each collection happened to have when its read completed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub photos: Vec<Photo>,
    pub users: Vec<User>,
    pub tags: Vec<Tag>,
}

/// Find the single user who posted a photo.
///
/// This is a required relation: a missing author is a data-integrity
/// violation and fails with
/// [`DanglingReference`](PhotoShareError::DanglingReference).
pub fn author_of<'a>(photo: &Photo, users: &'a [User]) -> Result<&'a User> {
    users
        .iter()
        .find(|user| user.id == photo.author_id)
        .ok_or_else(|| PhotoShareError::DanglingReference {
            photo: photo.id.clone(),
            author: photo.author_id.clone(),
        })
}

/// Users tagged in a photo, in tag collection order.
///
/// Tags referencing a missing user are dropped. Duplicate tags produce
/// duplicate entries.
pub fn tagged_users_of<'a>(photo: &Photo, tags: &[Tag], users: &'a [User]) -> Vec<&'a User> {
    tags.iter()
        .filter(|tag| tag.photo_id == photo.id)
        .filter_map(|tag| {
            let user = users.iter().find(|user| user.id == tag.user_id);
            if user.is_none() {
                log::warn!(
                    "dropping tag on photo {} referencing unknown user {}",
                    photo.id,
                    tag.user_id
                );
            }
            user
        })
        .collect()
}

/// Photos a user posted, in photo collection order.
pub fn photos_authored_by<'a>(user: &User, photos: &'a [Photo]) -> Vec<&'a Photo> {
    photos
        .iter()
        .filter(|photo| photo.author_id == user.id)
        .collect()
}

/// Photos a user appears in via tags, in tag collection order.
///
/// Tags referencing a missing photo are dropped.
pub fn photos_featuring<'a>(user: &User, tags: &[Tag], photos: &'a [Photo]) -> Vec<&'a Photo> {
    tags.iter()
        .filter(|tag| tag.user_id == user.id)
        .filter_map(|tag| {
            let photo = photos.iter().find(|photo| photo.id == tag.photo_id);
            if photo.is_none() {
                log::warn!(
                    "dropping tag for user {} referencing unknown photo {}",
                    user.id,
                    tag.photo_id
                );
            }
            photo
        })
        .collect()
}

/// A resolved photo relation value.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoFieldValue {
    PostedBy(UserView),
    TaggedUsers(Vec<UserView>),
}

/// A resolved user relation value.
#[derive(Debug, Clone, PartialEq)]
pub enum UserFieldValue {
    PostedPhotos(Vec<PhotoView>),
    InPhotos(Vec<PhotoView>),
}

/// Resolver for one photo relation.
pub type PhotoResolverFn =
    fn(&Photo, &Dataset, &UserSelection, &Config) -> Result<PhotoFieldValue>;

/// Resolver for one user relation.
pub type UserResolverFn = fn(&User, &Dataset, &Config) -> UserFieldValue;

impl PhotoRelation {
    /// The resolver computing this relation.
    pub fn resolver(self) -> PhotoResolverFn {
        match self {
            PhotoRelation::PostedBy => resolve_posted_by,
            PhotoRelation::TaggedUsers => resolve_tagged_users,
        }
    }
}

impl UserRelation {
    /// The resolver computing this relation.
    pub fn resolver(self) -> UserResolverFn {
        match self {
            UserRelation::PostedPhotos => resolve_posted_photos,
            UserRelation::InPhotos => resolve_in_photos,
        }
    }
}

fn resolve_posted_by(
    photo: &Photo,
    dataset: &Dataset,
    selection: &UserSelection,
    config: &Config,
) -> Result<PhotoFieldValue> {
    let author = author_of(photo, &dataset.users)?;
    Ok(PhotoFieldValue::PostedBy(build_user_view(
        author, dataset, selection, config,
    )))
}

fn resolve_tagged_users(
    photo: &Photo,
    dataset: &Dataset,
    selection: &UserSelection,
    config: &Config,
) -> Result<PhotoFieldValue> {
    let users = tagged_users_of(photo, &dataset.tags, &dataset.users)
        .into_iter()
        .map(|user| build_user_view(user, dataset, selection, config))
        .collect();
    Ok(PhotoFieldValue::TaggedUsers(users))
}

fn resolve_posted_photos(user: &User, dataset: &Dataset, config: &Config) -> UserFieldValue {
    UserFieldValue::PostedPhotos(
        photos_authored_by(user, &dataset.photos)
            .into_iter()
            .map(|photo| PhotoView::base(photo, config))
            .collect(),
    )
}

fn resolve_in_photos(user: &User, dataset: &Dataset, config: &Config) -> UserFieldValue {
    UserFieldValue::InPhotos(
        photos_featuring(user, &dataset.tags, &dataset.photos)
            .into_iter()
            .map(|photo| PhotoView::base(photo, config))
            .collect(),
    )
}

/// Assemble a photo view, resolving exactly the selected relations.
pub fn build_photo_view(
    photo: &Photo,
    dataset: &Dataset,
    selection: &PhotoSelection,
    config: &Config,
) -> Result<PhotoView> {
    let mut view = PhotoView::base(photo, config);

    for relation in PhotoRelation::ALL {
        let Some(user_selection) = selection.subselection(relation) else {
            continue;
        };
        match relation.resolver()(photo, dataset, user_selection, config)? {
            PhotoFieldValue::PostedBy(user) => view.posted_by = Some(user),
            PhotoFieldValue::TaggedUsers(users) => view.tagged_users = Some(users),
        }
    }

    Ok(view)
}

/// Assemble a user view, resolving exactly the selected photo lists.
///
/// Photos inside the resolved lists are relation-free; nesting stops one
/// level down.
pub fn build_user_view(
    user: &User,
    dataset: &Dataset,
    selection: &UserSelection,
    config: &Config,
) -> UserView {
    let mut view = UserView::base(user);

    for relation in UserRelation::ALL {
        if !selection.requests(relation) {
            continue;
        }
        match relation.resolver()(user, dataset, config) {
            UserFieldValue::PostedPhotos(photos) => view.posted_photos = Some(photos),
            UserFieldValue::InPhotos(photos) => view.in_photos = Some(photos),
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use photoshare_types::PhotoCategory;

    fn photo(id: &str, author_id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            name: format!("photo {}", id),
            category: PhotoCategory::Action,
            description: None,
            author_id: author_id.to_string(),
            created: Utc.with_ymd_and_hms(2018, 4, 15, 19, 9, 57).unwrap(),
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            photos: vec![photo("1", "gPlake"), photo("2", "sSchmidt")],
            users: vec![
                User::new("mHattrup", "Mike Hattrup"),
                User::new("gPlake", "Glen Plake"),
                User::new("sSchmidt", "Scot Schmidt"),
            ],
            tags: vec![
                Tag::new("2", "sSchmidt"),
                Tag::new("2", "mHattrup"),
            ],
        }
    }

    #[test]
    fn author_of_finds_the_matching_user() {
        let data = dataset();
        let author = author_of(&data.photos[0], &data.users).unwrap();
        assert_eq!(author.name.as_deref(), Some("Glen Plake"));
    }

    #[test]
    fn author_of_fails_on_missing_user() {
        let data = dataset();
        let users: Vec<User> = data
            .users
            .iter()
            .filter(|user| user.id != "gPlake")
            .cloned()
            .collect();

        let err = author_of(&data.photos[0], &users).unwrap_err();
        assert!(matches!(
            err,
            PhotoShareError::DanglingReference { ref photo, ref author }
                if photo == "1" && author == "gPlake"
        ));
    }

    #[test]
    fn tagged_users_follow_tag_collection_order() {
        let data = dataset();
        let tagged = tagged_users_of(&data.photos[1], &data.tags, &data.users);
        let names: Vec<_> = tagged.iter().map(|user| user.id.as_str()).collect();
        assert_eq!(names, ["sSchmidt", "mHattrup"]);
    }

    #[test]
    fn tags_to_missing_users_are_dropped_silently() {
        let mut data = dataset();
        data.tags.push(Tag::new("2", "nobody"));

        let tagged = tagged_users_of(&data.photos[1], &data.tags, &data.users);
        assert_eq!(tagged.len(), 2);
    }

    #[test]
    fn duplicate_tags_produce_duplicate_results() {
        let mut data = dataset();
        data.tags.push(Tag::new("2", "mHattrup"));

        let tagged = tagged_users_of(&data.photos[1], &data.tags, &data.users);
        let names: Vec<_> = tagged.iter().map(|user| user.id.as_str()).collect();
        assert_eq!(names, ["sSchmidt", "mHattrup", "mHattrup"]);
    }

    #[test]
    fn photos_authored_by_filters_on_author_id() {
        let data = dataset();
        let plake = &data.users[1];
        let posted = photos_authored_by(plake, &data.photos);
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].id, "1");
    }

    #[test]
    fn photos_featuring_drops_missing_photos() {
        let mut data = dataset();
        data.tags.push(Tag::new("404", "mHattrup"));

        let hattrup = &data.users[0];
        let featured = photos_featuring(hattrup, &data.tags, &data.photos);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "2");
    }

    #[test]
    fn every_relation_has_a_resolver() {
        // The maps are exhaustive by construction; exercise each entry.
        let data = dataset();
        let config = Config::default();

        for relation in PhotoRelation::ALL {
            let value =
                relation.resolver()(&data.photos[1], &data, &UserSelection::default(), &config)
                    .unwrap();
            match (relation, value) {
                (PhotoRelation::PostedBy, PhotoFieldValue::PostedBy(_)) => {}
                (PhotoRelation::TaggedUsers, PhotoFieldValue::TaggedUsers(_)) => {}
                (relation, value) => {
                    panic!("resolver mismatch for {}: {:?}", relation.name(), value)
                }
            }
        }

        for relation in UserRelation::ALL {
            let value = relation.resolver()(&data.users[1], &data, &config);
            match (relation, value) {
                (UserRelation::PostedPhotos, UserFieldValue::PostedPhotos(_)) => {}
                (UserRelation::InPhotos, UserFieldValue::InPhotos(_)) => {}
                (relation, value) => {
                    panic!("resolver mismatch for {}: {:?}", relation.name(), value)
                }
            }
        }
    }

    #[test]
    fn build_photo_view_resolves_only_selected_relations() {
        let data = dataset();
        let config = Config::default();

        let bare = build_photo_view(&data.photos[1], &data, &PhotoSelection::default(), &config)
            .unwrap();
        assert!(bare.posted_by.is_none());
        assert!(bare.tagged_users.is_none());

        let selection = PhotoSelection::default().with_tagged_users(UserSelection::default());
        let view = build_photo_view(&data.photos[1], &data, &selection, &config).unwrap();
        assert!(view.posted_by.is_none());
        assert_eq!(view.tagged_users.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn nested_user_photo_lists_are_relation_free() {
        let data = dataset();
        let config = Config::default();
        let selection = PhotoSelection::default().with_posted_by(UserSelection::all());

        let view = build_photo_view(&data.photos[0], &data, &selection, &config).unwrap();
        let author = view.posted_by.unwrap();
        assert_eq!(author.id, "gPlake");

        let posted = author.posted_photos.unwrap();
        assert_eq!(posted.len(), 1);
        assert!(posted[0].posted_by.is_none());
        assert!(posted[0].tagged_users.is_none());

        // No tag references Glen Plake, so inPhotos resolves to an empty
        // list rather than being omitted.
        assert_eq!(author.in_photos.as_ref().map(Vec::len), Some(0));
    }
}
