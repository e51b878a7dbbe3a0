mod road_data_configuration;

pub use road_data_configuration::RoadDataConfiguration;
