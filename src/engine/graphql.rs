// GraphQL API for the Dicebox engine
// This provides the Query and Mutation roots for dice rolling and messages

use async_graphql::{Context, EmptySubscription, InputObject, Object, Schema, SimpleObject, ID};

use crate::engine::dice;
use crate::engine::storage::MessageStorage;
use crate::models::{MessageDraft, RandomDie};
use crate::DiceboxError;

// GraphQL types - these are the API representations of our domain models

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Message")]
pub struct MessageGQL {
    pub id: ID,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<&crate::models::Message> for MessageGQL {
    fn from(message: &crate::models::Message) -> Self {
        Self {
            id: ID(message.id.clone()),
            content: message.content.clone(),
            author: message.author.clone(),
        }
    }
}

// Input types for mutations
#[derive(InputObject, Debug, Default)]
pub struct MessageInput {
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<MessageInput> for MessageDraft {
    fn from(input: MessageInput) -> Self {
        Self {
            content: input.content,
            author: input.author,
        }
    }
}

/// GraphQL wrapper around [`RandomDie`] exposing its fields as resolvers
///
/// `rollOnce` and `roll` are field resolvers on the returned die instance,
/// so `getDie(numSides: 4) { rollOnce roll(numRolls: 2) }` rolls the same
/// four-sided die for every field.
pub struct RandomDieGQL {
    die: RandomDie,
}

#[Object(name = "RandomDie")]
impl RandomDieGQL {
    /// The configured number of sides
    async fn num_sides(&self) -> i32 {
        self.die.num_sides as i32
    }

    /// Roll this die once
    async fn roll_once(&self) -> i32 {
        self.die.roll_once() as i32
    }

    /// Roll this die `numRolls` times
    async fn roll(&self, num_rolls: i32) -> async_graphql::Result<Vec<i32>> {
        let count = non_negative(num_rolls, "numRolls")?;
        Ok(self.die.roll(count).into_iter().map(|v| v as i32).collect())
    }
}

/// Validate a signed GraphQL count argument, converting it to the unsigned
/// count the domain functions take
fn non_negative(value: i32, arg: &str) -> async_graphql::Result<u32> {
    u32::try_from(value).map_err(|_| {
        async_graphql::Error::new(
            DiceboxError::InvalidInput(format!("{} must not be negative, got {}", arg, value))
                .to_string(),
        )
    })
}

/// Validate an optional side-count argument
///
/// `None` and `0` both mean "unspecified" and default to six downstream;
/// negative counts are rejected.
fn side_count(value: Option<i32>) -> async_graphql::Result<u32> {
    non_negative(value.unwrap_or(0), "numSides")
}

// GraphQL Query root
pub struct Query;

#[Object]
impl Query {
    /// The canonical greeting
    async fn hello(&self) -> &'static str {
        "Hello world!"
    }

    /// One of two fixed quotes, chosen with probability 0.5 each
    async fn quote_of_the_day(&self) -> &'static str {
        dice::quote_of_the_day()
    }

    /// A uniform random value in [0, 1)
    async fn random(&self) -> f64 {
        dice::random_fraction()
    }

    /// Three rolls of a six-sided die
    async fn roll_three_dice(&self) -> Vec<i32> {
        dice::roll_three_dice().into_iter().map(|v| v as i32).collect()
    }

    /// Roll `numDice` dice with `numSides` sides (default six)
    async fn roll_dice(
        &self,
        num_dice: i32,
        num_sides: Option<i32>,
    ) -> async_graphql::Result<Vec<i32>> {
        let num_dice = non_negative(num_dice, "numDice")?;
        let num_sides = side_count(num_sides)?;
        Ok(dice::roll_dice(num_dice, num_sides)
            .into_iter()
            .map(|v| v as i32)
            .collect())
    }

    /// Get a die with `numSides` sides (default six) for repeated rolling
    async fn get_die(&self, num_sides: Option<i32>) -> async_graphql::Result<RandomDieGQL> {
        Ok(RandomDieGQL {
            die: RandomDie::new(side_count(num_sides)?),
        })
    }

    /// Get a message by id
    async fn get_message(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<MessageGQL> {
        let storage = ctx.data::<Box<dyn MessageStorage>>()?;
        match storage.get_message(id.as_str()).await {
            Ok(Some(message)) => Ok(MessageGQL::from(&message)),
            Ok(None) => Err(async_graphql::Error::new(
                DiceboxError::MessageNotFound { id: id.to_string() }.to_string(),
            )),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to get message: {}",
                e
            ))),
        }
    }
}

// GraphQL Mutation root
pub struct Mutation;

#[Object]
impl Mutation {
    /// Store a new message under a freshly generated id
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<MessageGQL> {
        let storage = ctx.data::<Box<dyn MessageStorage>>()?;

        let draft = MessageDraft::from(input.unwrap_or_default());
        let created = storage
            .create_message(draft)
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to store message: {}", e)))?;

        Ok(MessageGQL::from(&created))
    }

    /// Replace an existing message's content/author, keeping its id
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<MessageGQL> {
        let storage = ctx.data::<Box<dyn MessageStorage>>()?;

        let draft = MessageDraft::from(input.unwrap_or_default());
        match storage.update_message(id.as_str(), draft).await {
            Ok(updated) => Ok(MessageGQL::from(&updated)),
            Err(e @ DiceboxError::MessageNotFound { .. }) => {
                Err(async_graphql::Error::new(e.to_string()))
            }
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to update message: {}",
                e
            ))),
        }
    }
}

/// The complete Dicebox schema: dice queries plus message mutations
pub type DiceboxSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build a schema backed by a fresh in-memory store
pub fn create_schema() -> DiceboxSchema {
    create_schema_with_storage(Box::new(crate::engine::storage::InMemoryStorage::default()))
}

/// Build a schema backed by the given storage
///
/// The storage trait object is injected as schema data so resolvers can
/// reach it through the request context.
pub fn create_schema_with_storage(storage: Box<dyn MessageStorage>) -> DiceboxSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(storage)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dice::QUOTES;
    use serde_json::Value;

    async fn execute(schema: &DiceboxSchema, query: &str) -> Value {
        let response = schema.execute(query).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_hello() {
        let schema = create_schema();
        let data = execute(&schema, "{ hello }").await;
        assert_eq!(data["hello"], "Hello world!");
    }

    #[tokio::test]
    async fn test_quote_of_the_day_is_one_of_the_two() {
        let schema = create_schema();
        let data = execute(&schema, "{ quoteOfTheDay }").await;
        let quote = data["quoteOfTheDay"].as_str().unwrap();
        assert!(QUOTES.contains(&quote));
    }

    #[tokio::test]
    async fn test_random_is_a_fraction() {
        let schema = create_schema();
        let data = execute(&schema, "{ random }").await;
        let value = data["random"].as_f64().unwrap();
        assert!((0.0..1.0).contains(&value));
    }

    #[tokio::test]
    async fn test_roll_three_dice() {
        let schema = create_schema();
        let data = execute(&schema, "{ rollThreeDice }").await;
        let rolls = data["rollThreeDice"].as_array().unwrap();
        assert_eq!(rolls.len(), 3);
        assert!(rolls
            .iter()
            .all(|v| (1..=6).contains(&v.as_i64().unwrap())));
    }

    #[tokio::test]
    async fn test_roll_dice_with_explicit_sides() {
        let schema = create_schema();
        let data = execute(&schema, "{ rollDice(numDice: 3, numSides: 6) }").await;
        let rolls = data["rollDice"].as_array().unwrap();
        assert_eq!(rolls.len(), 3);
        assert!(rolls
            .iter()
            .all(|v| (1..=6).contains(&v.as_i64().unwrap())));
    }

    #[tokio::test]
    async fn test_roll_dice_defaults_sides_to_six() {
        let schema = create_schema();
        let data = execute(&schema, "{ rollDice(numDice: 50) }").await;
        let rolls = data["rollDice"].as_array().unwrap();
        assert_eq!(rolls.len(), 50);
        assert!(rolls
            .iter()
            .all(|v| (1..=6).contains(&v.as_i64().unwrap())));
    }

    #[tokio::test]
    async fn test_negative_dice_count_is_a_field_error() {
        let schema = create_schema();
        let response = schema.execute("{ rollDice(numDice: -1) }").await;
        assert!(!response.errors.is_empty());
        assert!(response.errors[0].message.contains("numDice"));
    }

    #[tokio::test]
    async fn test_get_die_zero_sides_behaves_as_six() {
        let schema = create_schema();
        let data = execute(&schema, "{ getDie(numSides: 0) { numSides } }").await;
        assert_eq!(data["getDie"]["numSides"], 6);

        let data = execute(&schema, "{ getDie { numSides } }").await;
        assert_eq!(data["getDie"]["numSides"], 6);
    }

    #[tokio::test]
    async fn test_get_die_roll_fields() {
        let schema = create_schema();
        let data = execute(
            &schema,
            "{ getDie(numSides: 4) { numSides rollOnce roll(numRolls: 10) } }",
        )
        .await;
        let die = &data["getDie"];
        assert_eq!(die["numSides"], 4);
        assert!((1..=4).contains(&die["rollOnce"].as_i64().unwrap()));
        let rolls = die["roll"].as_array().unwrap();
        assert_eq!(rolls.len(), 10);
        assert!(rolls
            .iter()
            .all(|v| (1..=4).contains(&v.as_i64().unwrap())));
    }

    #[tokio::test]
    async fn test_negative_roll_count_is_a_field_error() {
        let schema = create_schema();
        let response = schema
            .execute("{ getDie { roll(numRolls: -3) } }")
            .await;
        assert!(!response.errors.is_empty());
        assert!(response.errors[0].message.contains("numRolls"));
    }

    #[tokio::test]
    async fn test_create_then_get_message() {
        let schema = create_schema();
        let data = execute(
            &schema,
            r#"mutation { createMessage(input: { content: "hi", author: "x" }) { id content author } }"#,
        )
        .await;
        let created = &data["createMessage"];
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(created["content"], "hi");
        assert_eq!(created["author"], "x");

        let query = format!(r#"{{ getMessage(id: "{}") {{ id content author }} }}"#, id);
        let data = execute(&schema, &query).await;
        assert_eq!(data["getMessage"]["id"], id.as_str());
        assert_eq!(data["getMessage"]["content"], "hi");
        assert_eq!(data["getMessage"]["author"], "x");
    }

    #[tokio::test]
    async fn test_get_absent_message_is_a_field_error() {
        let schema = create_schema();
        let response = schema
            .execute(r#"{ getMessage(id: "nonexistent") { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
        assert!(response.errors[0]
            .message
            .contains("No message with that id: nonexistent"));
    }

    #[tokio::test]
    async fn test_update_message_replaces_content() {
        let schema = create_schema();
        let data = execute(
            &schema,
            r#"mutation { createMessage(input: { content: "hi", author: "x" }) { id } }"#,
        )
        .await;
        let id = data["createMessage"]["id"].as_str().unwrap().to_string();

        let mutation = format!(
            r#"mutation {{ updateMessage(id: "{}", input: {{ content: "new" }}) {{ id content author }} }}"#,
            id
        );
        let data = execute(&schema, &mutation).await;
        assert_eq!(data["updateMessage"]["id"], id.as_str());
        assert_eq!(data["updateMessage"]["content"], "new");
        // Full replace: author was omitted from the input, so it is cleared
        assert_eq!(data["updateMessage"]["author"], Value::Null);

        let query = format!(r#"{{ getMessage(id: "{}") {{ content }} }}"#, id);
        let data = execute(&schema, &query).await;
        assert_eq!(data["getMessage"]["content"], "new");
    }

    #[tokio::test]
    async fn test_update_absent_message_is_a_field_error() {
        let schema = create_schema();
        let response = schema
            .execute(r#"mutation { updateMessage(id: "nonexistent", input: { content: "new" }) { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
        assert!(response.errors[0]
            .message
            .contains("No message with that id: nonexistent"));

        // The failed update must not have created an entry
        let response = schema
            .execute(r#"{ getMessage(id: "nonexistent") { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
    }
}
