pub(crate) mod epoch;
