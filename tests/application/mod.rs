mod analysis_service_test;
