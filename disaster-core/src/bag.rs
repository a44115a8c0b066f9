//! Bag packing: capacity accounting, the packed queue and submission.
use crate::api::{GameApi, SubmitResponse};
use crate::catalog::Item;
use crate::constants::{
    ALERT_CAPACITY_EXCEEDED, ALERT_SUBMIT_FAILED, ALERT_SUBMIT_OK, BAG_CAPACITY_UNIT,
    MAX_QUANTITY, MIN_QUANTITY,
};
use crate::nav::{PackingTicket, SceneTicket};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BagError {
    #[error("{}", ALERT_CAPACITY_EXCEEDED)]
    CapacityExceeded {
        weight: f64,
        volume: f64,
        max_weight: f64,
        max_volume: f64,
    },
    #[error("{}", ALERT_SUBMIT_FAILED)]
    SubmitFailed,
}

/// A bag template. Limits are multipliers of [`BAG_CAPACITY_UNIT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagSpec {
    pub id: u32,
    pub weight_limit: f64,
    pub volume_limit: f64,
    pub bag_weight: f64,
    pub description: String,
}

impl Default for BagSpec {
    fn default() -> Self {
        Self {
            id: 1,
            weight_limit: 10.0,
            volume_limit: 10.0,
            bag_weight: 0.0,
            description: "기본 가방 설명".to_string(),
        }
    }
}

impl BagSpec {
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        BAG_CAPACITY_UNIT * self.weight_limit
    }

    #[must_use]
    pub fn max_volume(&self) -> f64 {
        BAG_CAPACITY_UNIT * self.volume_limit
    }
}

/// Clamp a quantity picked on the range control to the allowed span.
#[must_use]
pub fn clamp_quantity(quantity: u32) -> u32 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// Items packed so far, in insertion order, with running totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BagQueue {
    spec: BagSpec,
    entries: Vec<Item>,
    total_weight: f64,
    total_volume: f64,
}

impl BagQueue {
    #[must_use]
    pub fn new(spec: BagSpec) -> Self {
        Self {
            spec,
            entries: Vec::new(),
            total_weight: 0.0,
            total_volume: 0.0,
        }
    }

    #[must_use]
    pub const fn spec(&self) -> &BagSpec {
        &self.spec
    }

    #[must_use]
    pub fn entries(&self) -> &[Item] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub const fn total_volume(&self) -> f64 {
        self.total_volume
    }

    /// Append `quantity` copies of `item`.
    ///
    /// Reaching a cap exactly is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`BagError::CapacityExceeded`] when either prospective total
    /// would exceed its cap; the queue is left untouched.
    pub fn add(&mut self, item: &Item, quantity: u32) -> Result<(), BagError> {
        let quantity = clamp_quantity(quantity);
        let weight = self.total_weight + item.weight * f64::from(quantity);
        let volume = self.total_volume + item.volume * f64::from(quantity);
        let (max_weight, max_volume) = (self.spec.max_weight(), self.spec.max_volume());
        if weight > max_weight || volume > max_volume {
            log::debug!(
                "Rejected {quantity} x {}: {weight}/{max_weight} kg, {volume}/{max_volume} m3",
                item.name
            );
            return Err(BagError::CapacityExceeded {
                weight,
                volume,
                max_weight,
                max_volume,
            });
        }
        self.entries
            .extend(std::iter::repeat_n(item, quantity as usize).cloned());
        self.total_weight = weight;
        self.total_volume = volume;
        Ok(())
    }

    /// Remove the entry at `index`, returning it. Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index >= self.entries.len() {
            return None;
        }
        let item = self.entries.remove(index);
        self.total_weight -= item.weight;
        self.total_volume -= item.volume;
        Some(item)
    }

    /// Count packed entries by internal item name.
    #[must_use]
    pub fn contents(&self) -> BagContents {
        let mut items = BTreeMap::new();
        for item in &self.entries {
            *items.entry(item.name.clone()).or_insert(0) += 1;
        }
        BagContents {
            items,
            total_weight: self.total_weight,
            total_volume: self.total_volume,
        }
    }
}

/// Packed items grouped by name, with totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagContents {
    pub items: BTreeMap<String, u32>,
    pub total_weight: f64,
    pub total_volume: f64,
}

/// Submission body: item counts flattened next to `totalWeight`,
/// `totalVolume` and `bagID`.
///
/// The totals and bag id are written last, so an item whose name collides
/// with one of those keys is overwritten.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BagSubmission(Map<String, Value>);

impl BagSubmission {
    #[must_use]
    pub fn flatten(contents: &BagContents, bag_id: u32) -> Self {
        let mut body: Map<String, Value> = contents
            .items
            .iter()
            .map(|(name, count)| (name.clone(), Value::from(*count)))
            .collect();
        body.insert("totalWeight".into(), Value::from(contents.total_weight));
        body.insert("totalVolume".into(), Value::from(contents.total_volume));
        body.insert("bagID".into(), Value::from(bag_id));
        Self(body)
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Accepted submission: where to go next and what to tell the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub scene: SceneTicket,
    pub message: String,
}

impl Submitted {
    fn new(scene: SceneTicket, response: SubmitResponse) -> Self {
        let message = response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| ALERT_SUBMIT_OK.to_string());
        Self { scene, message }
    }
}

/// Submit the packed bag for the team in `ticket`.
///
/// The queue is only read; on failure the caller keeps it for a retry.
/// Nothing prevents the same bag from being submitted twice.
///
/// # Errors
///
/// Returns [`BagError::SubmitFailed`] for any request failure.
pub async fn submit_bag<A>(
    api: &A,
    ticket: &PackingTicket,
    queue: &BagQueue,
) -> Result<Submitted, BagError>
where
    A: GameApi + ?Sized,
{
    let contents = queue.contents();
    let body = BagSubmission::flatten(&contents, ticket.selected_bag.id);
    log::debug!("Submitting bag for {}: {:?}", ticket.team_name, contents.items);
    match api
        .submit_bag(&ticket.room_code, &ticket.team_name, &body)
        .await
    {
        Ok(response) => {
            log::info!("Bag submitted for team {}", ticket.team_name);
            let scene = SceneTicket {
                room_code: ticket.room_code.clone(),
                team_name: ticket.team_name.clone(),
                selected_bag: ticket.selected_bag.clone(),
                bag_contents: contents,
            };
            Ok(Submitted::new(scene, response))
        }
        Err(err) => {
            log::error!("Error submitting bag contents: {err}");
            Err(BagError::SubmitFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::RecordingApi;
    use futures::executor::block_on;
    use serde_json::json;

    fn item(name: &str, weight: f64, volume: f64) -> Item {
        Item {
            id: 1,
            kor_name: name.to_string(),
            name: name.to_string(),
            weight,
            volume,
            description: String::new(),
            image_path: Item::image_path_for(name),
        }
    }

    fn small_bag() -> BagSpec {
        BagSpec {
            weight_limit: 1.0,
            ..BagSpec::default()
        }
    }

    #[test]
    fn default_bag_caps_at_one_hundred() {
        let bag = BagSpec::default();
        assert!((bag.max_weight() - 100.0).abs() < f64::EPSILON);
        assert!((bag.max_volume() - 100.0).abs() < f64::EPSILON);
        assert_eq!(bag.description, "기본 가방 설명");
    }

    #[test]
    fn bag_spec_uses_camel_case_fields() {
        let json = serde_json::to_value(BagSpec::default()).expect("serialize");
        assert_eq!(json["weightLimit"], json!(10.0));
        assert_eq!(json["bagWeight"], json!(0.0));
    }

    #[test]
    fn filling_to_the_cap_is_allowed_and_one_more_is_not() {
        let water = item("water", 1.0, 1.0);
        let mut queue = BagQueue::new(small_bag());
        queue.add(&water, 5).expect("first five");
        queue.add(&water, 5).expect("reach the boundary");
        assert_eq!(queue.len(), 10);
        assert!((queue.total_weight() - 10.0).abs() < f64::EPSILON);

        let before = queue.clone();
        let err = queue.add(&water, 1).unwrap_err();
        assert!(matches!(err, BagError::CapacityExceeded { .. }));
        assert_eq!(err.to_string(), "Bag capacity exceeded!");
        assert_eq!(queue, before);
    }

    #[test]
    fn volume_alone_can_reject() {
        let pillow = item("pillow", 0.1, 60.0);
        let mut queue = BagQueue::new(BagSpec::default());
        queue.add(&pillow, 1).expect("one pillow");
        assert!(queue.add(&pillow, 1).is_err());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn quantity_is_clamped_to_range() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(7), 7);
        assert_eq!(clamp_quantity(99), 10);

        let mut queue = BagQueue::new(BagSpec::default());
        queue.add(&item("rope", 0.5, 0.5), 0).expect("clamped to one");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_takes_exactly_one_entry() {
        let mut queue = BagQueue::new(BagSpec::default());
        queue.add(&item("water", 1.0, 2.0), 2).expect("water");
        queue.add(&item("radio", 3.0, 1.5), 1).expect("radio");

        let removed = queue.remove(2).expect("radio removed");
        assert_eq!(removed.name, "radio");
        assert_eq!(queue.len(), 2);
        assert!((queue.total_weight() - 2.0).abs() < 1e-9);
        assert!((queue.total_volume() - 4.0).abs() < 1e-9);

        assert!(queue.remove(5).is_none());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn contents_count_by_name() {
        let mut queue = BagQueue::new(BagSpec::default());
        queue.add(&item("water", 1.0, 1.0), 3).expect("water");
        queue.add(&item("radio", 2.0, 1.0), 1).expect("radio");
        let contents = queue.contents();
        assert_eq!(contents.items.get("water"), Some(&3));
        assert_eq!(contents.items.get("radio"), Some(&1));
        assert!((contents.total_weight - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flattened_body_puts_totals_after_counts() {
        let mut contents = BagContents::default();
        contents.items.insert("water".into(), 2);
        contents.items.insert("bagID".into(), 9);
        contents.total_weight = 2.0;
        contents.total_volume = 3.5;

        let body = BagSubmission::flatten(&contents, 4).to_value();
        assert_eq!(
            body,
            json!({"water": 2, "totalWeight": 2.0, "totalVolume": 3.5, "bagID": 4})
        );
    }

    #[test]
    fn submit_success_carries_grouped_contents() {
        let api = RecordingApi::default();
        let ticket = PackingTicket::resolve(None, Some(&BagSpec::default()));
        let mut queue = BagQueue::new(ticket.selected_bag.clone());
        queue.add(&item("water", 1.0, 1.0), 2).expect("water");

        let submitted = block_on(submit_bag(&api, &ticket, &queue)).expect("submitted");
        assert_eq!(submitted.message, "Bag contents submitted successfully!");
        assert_eq!(submitted.scene.room_code, "UNKNOWN_ROOM");
        assert_eq!(submitted.scene.bag_contents.items.get("water"), Some(&2));
        assert_eq!(
            api.calls.borrow().as_slice(),
            ["/player/room/UNKNOWN_ROOM/team/UNKNOWN_TEAM/submit_bag"]
        );
        assert_eq!(api.submissions.borrow()[0]["bagID"], json!(1));
    }

    #[test]
    fn submit_prefers_server_message() {
        let api = RecordingApi {
            submit_message: Some("저장 완료".into()),
            ..RecordingApi::default()
        };
        let ticket = PackingTicket::resolve(None, None);
        let queue = BagQueue::new(ticket.selected_bag.clone());
        let submitted = block_on(submit_bag(&api, &ticket, &queue)).expect("submitted");
        assert_eq!(submitted.message, "저장 완료");
    }

    #[test]
    fn submit_failure_keeps_queue_for_retry() {
        let api = RecordingApi::failing();
        let ticket = PackingTicket::resolve(None, None);
        let mut queue = BagQueue::new(ticket.selected_bag.clone());
        queue.add(&item("water", 1.0, 1.0), 1).expect("water");

        let err = block_on(submit_bag(&api, &ticket, &queue)).unwrap_err();
        assert_eq!(err, BagError::SubmitFailed);
        assert_eq!(
            err.to_string(),
            "Failed to submit bag contents. Please try again."
        );
        assert_eq!(queue.len(), 1);
    }
}
