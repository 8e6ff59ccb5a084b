use anyhow::Context;
use chrono::{Duration, Utc};
use feedbox_api::{
    Comment, CommentId, CurrentUser, Idea, IdeaId, IdeaNumber, PageData, User, UserId,
};
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

const DEFAULT_API_HOST: &str = "http://localhost:3000";

const NUM_USERS: usize = 5;
const NUM_COLLABORATORS: usize = 1;

const NUM_COMMENTS: usize = 12;
const IDEA_TITLE_WORDS: usize = 6;
const COMMENT_WORDS: usize = 40;

// out of 100
const EDITED_PERCENT: u32 = 30;

fn gen_user(i: usize) -> User {
    User {
        id: UserId(Uuid::new_v4()),
        name: lipsum::lipsum_words(2),
        avatar_url: Some(format!("https://www.gravatar.com/avatar/{i}?d=identicon")),
    }
}

fn gen_comment_text(rng: &mut impl Rng) -> String {
    // Some comments span several lines, to exercise multi-line rendering
    (0..rng.gen_range(1..=3))
        .map(|_| lipsum::lipsum_words(rng.gen_range(1..=COMMENT_WORDS)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> anyhow::Result<()> {
    let api_host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_API_HOST));
    let mut rng = rand::thread_rng();

    // Generate users, the first ones being collaborators
    let users = (0..NUM_USERS).map(gen_user).collect::<Vec<_>>();
    let pick_user = |rng: &mut rand::rngs::ThreadRng| -> User {
        users
            .choose(rng)
            .expect("generating comments without users")
            .clone()
    };

    // Generate comments, in creation order
    let mut date = Utc::now() - Duration::days(30);
    let comments = (0..NUM_COMMENTS)
        .map(|_| {
            date = date + Duration::minutes(rng.gen_range(1..(60 * 24)));
            let mut c = Comment {
                id: CommentId(Uuid::new_v4()),
                content: gen_comment_text(&mut rng),
                user: pick_user(&mut rng),
                created_on: date,
                edited_on: None,
                edited_by: None,
            };
            if rng.gen_ratio(EDITED_PERCENT, 100) {
                let editor = match rng.gen_bool(0.5) {
                    true => c.user.clone(),
                    false => users[rng.gen_range(0..NUM_COLLABORATORS)].clone(),
                };
                let edit_date = date + Duration::minutes(rng.gen_range(1..120));
                c = c.edited(gen_comment_text(&mut rng), editor, edit_date);
            }
            c
        })
        .collect::<Vec<_>>();

    // View the page as a random user
    let viewer = users.choose(&mut rng).map(|u| CurrentUser {
        id: u.id,
        name: u.name.clone(),
        is_collaborator: users[..NUM_COLLABORATORS].iter().any(|c| c.id == u.id),
        avatar_url: u.avatar_url.clone(),
    });

    let page = PageData {
        api_host,
        idea: Idea {
            id: IdeaId(Uuid::new_v4()),
            number: IdeaNumber(rng.gen_range(1..1000)),
            title: lipsum::lipsum_title()
                .split_whitespace()
                .take(IDEA_TITLE_WORDS)
                .collect::<Vec<_>>()
                .join(" "),
        },
        comments,
        user: viewer,
    };
    page.validate().context("generated invalid page data")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&page).context("serializing page data")?
    );
    Ok(())
}
