mod history_ring;

pub(crate) use history_ring::HistoryRing;
