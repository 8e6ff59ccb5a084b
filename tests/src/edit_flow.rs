use std::{cell::RefCell, rc::Rc};

use chrono::{TimeZone, Utc};
use feedbox_client::{
    api::{Comment, CommentId, CurrentUser, Error, Idea, IdeaId, IdeaNumber, User, UserId},
    replace_comment,
    view::{self, Body},
    EditController, EditSession, SaveFailed, SaveOutcome, SessionHook, UpdateInvoker,
};
use feedbox_mock_server::{MockInvoker, MockServer};
use futures::executor::block_on;
use uuid::Uuid;

const IDEA: IdeaNumber = IdeaNumber(42);

fn viewer(id: u128, is_collaborator: bool) -> CurrentUser {
    CurrentUser {
        id: UserId(Uuid::from_u128(id)),
        name: format!("user-{id}"),
        is_collaborator,
        avatar_url: None,
    }
}

fn comment(id: u128, author: u128, content: &str) -> Comment {
    Comment {
        id: CommentId(Uuid::from_u128(id)),
        content: String::from(content),
        user: User {
            id: UserId(Uuid::from_u128(author)),
            name: format!("user-{author}"),
            avatar_url: None,
        },
        created_on: Utc.with_ymd_and_hms(2022, 12, 1, 8, 0, 0).unwrap(),
        edited_on: None,
        edited_by: None,
    }
}

/// Server holding one idea with comments by users 5 and 7, and the local copy
/// of those comments a page would have
fn setup() -> (Rc<RefCell<MockServer>>, Vec<Comment>) {
    let comments = vec![
        comment(1, 5, "hello"),
        comment(2, 7, "hi there"),
        comment(3, 5, "anyone?"),
    ];
    let mut server = MockServer::new();
    server
        .add_idea(Idea {
            id: IdeaId(Uuid::new_v4()),
            number: IDEA,
            title: String::from("Dark mode"),
        })
        .expect("adding idea");
    for c in comments.iter() {
        server.add_comment(IDEA, c.clone()).expect("adding comment");
    }
    (Rc::new(RefCell::new(server)), comments)
}

fn server_content(server: &Rc<RefCell<MockServer>>, idx: usize) -> String {
    server.borrow().comments(IDEA).expect("listing comments")[idx]
        .content
        .clone()
}

/// Runs a save and folds a successful result into `comments`, the way the page does
fn save(
    ctl: &mut EditController,
    invoker: &impl UpdateInvoker,
    comments: &mut Vec<Comment>,
    user: &CurrentUser,
) -> SaveOutcome {
    let outcome =
        block_on(ctl.confirm(invoker, IDEA, &comments[..], user)).expect("nothing to save");
    if let SaveOutcome::Saved { updated, .. } = &outcome {
        assert!(replace_comment(comments, updated.clone()));
    }
    outcome
}

#[test]
fn author_edits_own_comment() {
    let (server, mut comments) = setup();
    let me = viewer(5, false);
    let invoker = MockInvoker::new(server.clone(), me.clone());
    let mut ctl = EditController::new();

    assert_eq!(ctl.start_edit(&comments[2]), SessionHook::Started);
    ctl.set_draft(String::from("anyone? bump"));
    let outcome = save(&mut ctl, &invoker, &mut comments, &me);
    assert!(matches!(
        outcome,
        SaveOutcome::Saved {
            hook: SessionHook::Stopped,
            ..
        }
    ));

    assert_eq!(ctl.session(), &EditSession::Browsing);
    assert_eq!(server_content(&server, 2), "anyone? bump");
    assert_eq!(comments[2].content, "anyone? bump");
    assert_eq!(comments[2].edited_by, Some(me.as_user()));
    assert_eq!(comments[0].content, "hello");

    let views = view::comment_views(&comments, Some(&me), ctl.session());
    let edited = views[2].edited.expect("edited marker missing");
    assert_eq!(edited.by, &me.as_user());
    assert!(views[0].edited.is_none());
    assert_eq!(views[2].body, Body::Text("anyone? bump"));
}

#[test]
fn collaborator_edits_any_comment() {
    let (server, mut comments) = setup();
    let admin = viewer(9, true);
    let invoker = MockInvoker::new(server.clone(), admin.clone());
    let mut ctl = EditController::new();

    let views = view::comment_views(&comments, Some(&admin), ctl.session());
    assert!(views.iter().all(|v| v.can_edit));

    ctl.start_edit(&comments[1]);
    ctl.set_draft(String::from("hi there (moderated)"));
    save(&mut ctl, &invoker, &mut comments, &admin);
    assert_eq!(server_content(&server, 1), "hi there (moderated)");
    assert_eq!(comments[1].edited_by, Some(admin.as_user()));
    assert_eq!(comments[1].user.id, UserId(Uuid::from_u128(7)));
}

#[test]
fn refused_save_keeps_editor_open() {
    let (server, mut comments) = setup();
    // user 7 could not click "edit" on comment 1, but the server must refuse anyway
    let intruder = viewer(7, false);
    let invoker = MockInvoker::new(server.clone(), intruder.clone());
    let mut ctl = EditController::new();

    let views = view::comment_views(&comments, Some(&intruder), ctl.session());
    assert_eq!(
        views.iter().map(|v| v.can_edit).collect::<Vec<_>>(),
        vec![false, true, false]
    );

    ctl.start_edit(&comments[0]);
    ctl.set_draft(String::from("defaced"));
    assert_eq!(
        save(&mut ctl, &invoker, &mut comments, &intruder),
        SaveOutcome::Failed
    );
    assert_eq!(server_content(&server, 0), "hello");
    assert_eq!(comments[0].content, "hello");

    let e = ctl.session().editing().expect("session was closed");
    assert_eq!(e.draft, "defaced");
    assert_eq!(e.error, Some(SaveFailed(Error::PermissionDenied)));
}

#[test]
fn blank_content_is_refused() {
    let (server, mut comments) = setup();
    let me = viewer(5, false);
    let invoker = MockInvoker::new(server.clone(), me.clone());
    let mut ctl = EditController::new();

    ctl.start_edit(&comments[0]);
    ctl.set_draft(String::from("   "));
    assert_eq!(
        save(&mut ctl, &invoker, &mut comments, &me),
        SaveOutcome::Failed
    );
    let views = view::comment_views(&comments, Some(&me), ctl.session());
    match &views[0].body {
        Body::Editor(e) => {
            let err = e.error.expect("error not shown");
            assert_eq!(err.0.field(), Some("content"));
            assert_eq!(err.to_string(), "Comment content is required");
        }
        b => panic!("expected an editor, got {b:?}"),
    }

    // Fixing the draft and saving again goes through
    ctl.set_draft(String::from("hello again"));
    assert!(matches!(
        save(&mut ctl, &invoker, &mut comments, &me),
        SaveOutcome::Saved { .. }
    ));
    assert_eq!(server_content(&server, 0), "hello again");
}

#[test]
fn late_save_does_not_disturb_new_session() {
    let (server, mut comments) = setup();
    let me = viewer(5, false);
    let invoker = MockInvoker::new(server.clone(), me.clone());
    let mut ctl = EditController::new();

    ctl.start_edit(&comments[0]);
    ctl.set_draft(String::from("hello, edited"));
    let req = ctl.begin_save(IDEA).expect("nothing to save");
    let response = invoker.update_comment(req.idea, req.comment, req.content.clone());

    // The user moves on before the response comes back
    ctl.start_edit(&comments[2]);
    ctl.set_draft(String::from("still typing"));

    let result = block_on(response);
    let outcome = ctl.finish_save(&req, result, &comments[0], &me, Utc::now());
    match outcome {
        SaveOutcome::Stale {
            updated: Some(updated),
        } => assert!(replace_comment(&mut comments, updated)),
        o => panic!("unexpected outcome {o:?}"),
    }

    assert_eq!(server_content(&server, 0), "hello, edited");
    assert_eq!(comments[0].content, "hello, edited");
    let e = ctl.session().editing().expect("new session was closed");
    assert_eq!(e.target, comments[2].id);
    assert_eq!(e.draft, "still typing");
    assert_eq!(e.error, None);
}

#[test]
fn cancel_never_reaches_server() {
    bolero::check!()
        .with_type::<(u8, String)>()
        .cloned()
        .for_each(|(idx, draft)| {
            let (server, comments) = setup();
            let idx = idx as usize % comments.len();
            let mut ctl = EditController::new();
            ctl.start_edit(&comments[idx]);
            ctl.set_draft(draft);
            assert_eq!(ctl.cancel(), Some(SessionHook::Stopped));
            assert_eq!(ctl.session(), &EditSession::Browsing);
            assert_eq!(server.borrow().comments(IDEA).unwrap(), &comments[..]);
        })
}
