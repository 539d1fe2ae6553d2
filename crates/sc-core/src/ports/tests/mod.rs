pub(crate) mod mock_ports;
