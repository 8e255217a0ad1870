mod merge_conflicting_edits;
mod merge_default_action_apply_local;
mod merge_default_action_revert_to_base;
mod merge_in_place_overwrites_base;
mod merge_missing_remote_copies_local;
mod merge_non_conflicting_sides;
mod merge_two_way_apply_remote;
mod merge_two_way_conflict_markers;
